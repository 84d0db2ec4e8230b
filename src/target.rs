use crate::config::Config;

/// Region targets may spawn in: the logical surface minus padding and the HUD strip.
/// Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PlayArea {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_x: config.target_padding,
            max_x: config.width - config.target_padding,
            min_y: config.target_padding + config.top_bar_height,
            max_y: config.height - config.target_padding,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// One clickable circle. Never mutated after creation; it only goes away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    /// Session clock reading (seconds) when the target appeared
    pub created_at: f64,
}

impl Target {
    /// Build a target inside `area`; out-of-range coordinates are pulled onto its edge.
    pub fn create(x: i32, y: i32, radius: i32, created_at: f64, area: &PlayArea) -> Self {
        Self {
            x: x.clamp(area.min_x, area.max_x),
            y: y.clamp(area.min_y, area.max_y),
            radius,
            created_at,
        }
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.created_at
    }

    /// Expired once its age strictly exceeds `expiry` seconds.
    pub fn is_expired(&self, now: f64, expiry: f64) -> bool {
        self.age(now) > expiry
    }

    pub fn collides(&self, px: i32, py: i32) -> bool {
        self.collides_f(px as f64, py as f64)
    }

    /// Same test for sub-pixel points (used when painting half cells).
    pub fn collides_f(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x as f64;
        let dy = py - self.y as f64;
        (dx * dx + dy * dy).sqrt() <= self.radius as f64
    }
}
