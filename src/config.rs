use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Game constants. The defaults are the reference game; a config file may
/// override them but nothing in the app ever writes one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Logical play surface, independent of the terminal size
    pub width: i32,
    pub height: i32,
    pub top_bar_height: i32,
    pub target_padding: i32,
    pub target_radius: i32,
    pub target_interval_ms: u64,
    pub target_expiry_secs: f64,
    pub lives: u32,
    pub frame_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            top_bar_height: 50,
            target_padding: 30,
            target_radius: 15,
            target_interval_ms: 1000,
            target_expiry_secs: 1.75,
            lives: 3,
            frame_rate: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptySurface,
    NegativePadding,
    NoTargetRadius,
    NoLives,
    NoFrameRate,
    NoSpawnInterval,
    NegativeExpiry,
    PlayAreaTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySurface => write!(f, "width and height must be at least 1"),
            ConfigError::NegativePadding => write!(f, "target_padding must not be negative"),
            ConfigError::NoTargetRadius => write!(f, "target_radius must be at least 1"),
            ConfigError::NoLives => write!(f, "lives must be at least 1"),
            ConfigError::NoFrameRate => write!(f, "frame_rate must be at least 1"),
            ConfigError::NoSpawnInterval => write!(f, "target_interval_ms must be at least 1"),
            ConfigError::NegativeExpiry => write!(f, "target_expiry_secs must not be negative"),
            ConfigError::PlayAreaTooSmall => {
                write!(f, "padding and top bar leave no room to spawn targets")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptySurface);
        }
        if self.target_padding < 0 {
            return Err(ConfigError::NegativePadding);
        }
        if self.target_radius < 1 {
            return Err(ConfigError::NoTargetRadius);
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::NoFrameRate);
        }
        if self.target_interval_ms == 0 {
            return Err(ConfigError::NoSpawnInterval);
        }
        if self.target_expiry_secs.is_nan() || self.target_expiry_secs < 0.0 {
            return Err(ConfigError::NegativeExpiry);
        }
        let margin = self.target_padding.saturating_mul(2);
        let spawn_width = self.width.saturating_sub(margin);
        let spawn_height = self
            .height
            .saturating_sub(margin)
            .saturating_sub(self.top_bar_height);
        if self.top_bar_height < 0 || spawn_width < 0 || spawn_height < 0 {
            return Err(ConfigError::PlayAreaTooSmall);
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "flik") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("flik_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => match cfg.validate() {
                Ok(()) => {
                    log::info!("Loaded config from {}", self.path.display());
                    cfg
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring config {}: {err}; using defaults",
                        self.path.display()
                    );
                    Config::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "Unable to parse config {}: {err}; using defaults",
                    self.path.display()
                );
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nope.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "lives": 5 }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.lives, 5);
        assert_eq!(cfg.target_radius, 15);
        assert_eq!(cfg.width, 1600);
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn invalid_values_load_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "lives": 0 }"#).unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn validate_rejects_cramped_play_area() {
        let cfg = Config {
            width: 50,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::PlayAreaTooSmall));
    }

    #[test]
    fn validate_rejects_an_empty_surface() {
        for (width, height) in [(0, 900), (1600, 0), (-5, 900)] {
            let cfg = Config {
                width,
                height,
                target_padding: 0,
                top_bar_height: 0,
                ..Config::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::EmptySurface), "{width}x{height}");
        }
    }

    #[test]
    fn validate_rejects_negative_padding() {
        let cfg = Config {
            target_padding: -10,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NegativePadding));
    }

    #[test]
    fn validate_rejects_a_pointless_radius() {
        for target_radius in [0, -3] {
            let cfg = Config {
                target_radius,
                ..Config::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::NoTargetRadius));
        }
    }

    #[test]
    fn validate_survives_huge_padding() {
        let cfg = Config {
            target_padding: i32::MAX,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::PlayAreaTooSmall));
    }

    #[test]
    fn zero_width_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "width": 0, "target_padding": 0 }"#).unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn validate_rejects_zero_frame_rate() {
        let cfg = Config {
            frame_rate: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoFrameRate));
    }
}
