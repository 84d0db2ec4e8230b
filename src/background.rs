use std::path::Path;

use image::imageops::FilterType;
use image::{ImageError, RgbImage};
use ratatui::style::Color;

/// Fill used when no background image could be loaded
pub const FALLBACK_COLOR: Color = Color::Rgb(0, 25, 40);

/// Arena backdrop: an image stretched over the logical surface, or a flat fill.
#[derive(Debug, Clone)]
pub struct Background {
    image: Option<RgbImage>,
}

impl Background {
    pub fn solid() -> Self {
        Self { image: None }
    }

    /// Decode `path` and scale it to the logical surface.
    pub fn load<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Self, ImageError> {
        let img = image::open(path)?;
        let scaled = img
            .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
            .to_rgb8();
        Ok(Self {
            image: Some(scaled),
        })
    }

    /// Never fails: an unreadable image is logged and replaced with the flat fill.
    pub fn load_or_fallback<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Self {
        let path = path.as_ref();
        match Self::load(path, width, height) {
            Ok(bg) => {
                log::info!("Loaded background image {}", path.display());
                bg
            }
            Err(err) => {
                log::warn!("Unable to load background image {}: {err}", path.display());
                Self::solid()
            }
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Colour at a logical point.
    pub fn sample(&self, x: f64, y: f64) -> Color {
        match &self.image {
            Some(img) => {
                let px = (x.max(0.0) as u32).min(img.width() - 1);
                let py = (y.max(0.0) as u32).min(img.height() - 1);
                let [r, g, b] = img.get_pixel(px, py).0;
                Color::Rgb(r, g, b)
            }
            None => FALLBACK_COLOR,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::solid()
    }
}
