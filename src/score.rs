/// Running tally for one session. Speed and accuracy are derived on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTracker {
    pub elapsed: f64,
    pub hits: u32,
    pub total_clicks: u32,
    pub misses: u32,
    pub lives: u32,
}

impl ScoreTracker {
    pub fn new(lives: u32) -> Self {
        Self {
            elapsed: 0.0,
            hits: 0,
            total_clicks: 0,
            misses: 0,
            lives,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_click(&mut self) {
        self.total_clicks += 1;
    }

    /// Misses never exceed `lives`.
    pub fn record_miss(&mut self) {
        if self.misses < self.lives {
            self.misses += 1;
        }
    }

    pub fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
    }

    pub fn lives_left(&self) -> u32 {
        self.lives.saturating_sub(self.misses)
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.misses >= self.lives
    }

    /// Targets per second
    pub fn speed(&self) -> f64 {
        if self.elapsed > 0.0 {
            self.hits as f64 / self.elapsed
        } else {
            0.0
        }
    }

    /// Percentage of clicks that hit a target
    pub fn accuracy(&self) -> f64 {
        if self.total_clicks > 0 {
            self.hits as f64 / self.total_clicks as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// `MM:SS.d`, every field truncated.
pub fn format_time(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0) as u64;
    let minutes = total_ms / 60_000;
    let seconds = (total_ms / 1000) % 60;
    let decis = (total_ms % 1000) / 100;

    format!("{minutes:02}:{seconds:02}.{decis}")
}
