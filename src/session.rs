use crate::config::Config;
use crate::input::InputFrame;
use crate::judge::{judge, Judgement};
use crate::score::ScoreTracker;
use crate::spawner::Spawner;
use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Running,
    Ended,
}

/// Everything one play-through owns: the score, the (0 or 1) active
/// target and the spawn timer. Frozen once the phase reaches `Ended`.
#[derive(Debug)]
pub struct Session {
    pub score: ScoreTracker,
    phase: Phase,
    target: Option<Target>,
    spawner: Spawner,
    expiry: f64,
}

impl Session {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        Self {
            score: ScoreTracker::new(config.lives),
            phase: Phase::Running,
            target: None,
            spawner: Spawner::new(config, seed),
            expiry: config.target_expiry_secs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Advance one tick: spawn, judge, score, and check for the end.
    ///
    /// The order is fixed: count clicks, fire the spawn timer, judge, then
    /// check lives. A target spawned this tick is judged this tick because
    /// spawning comes before judgement.
    ///
    /// `now` is the session clock in seconds, read once at the top of the tick.
    pub fn step(&mut self, now: f64, frame: &InputFrame) -> Phase {
        if self.phase == Phase::Ended {
            return self.phase;
        }

        self.score.set_elapsed(now);
        for _ in 0..frame.clicks {
            self.score.record_click();
        }

        self.spawner.tick(now, &mut self.target);

        let judgement = judge(frame, self.target.as_ref(), now, self.expiry);
        self.apply(&judgement, now);

        if self.score.is_out_of_lives() {
            log::info!(
                "session ended at {now:.2}s: {} hits, {} clicks, {} misses",
                self.score.hits,
                self.score.total_clicks,
                self.score.misses
            );
            self.phase = Phase::Ended;
            self.target = None;
        }

        self.phase
    }

    fn apply(&mut self, judgement: &Judgement, now: f64) {
        if judgement.hit {
            self.score.record_hit();
            log::debug!("hit at {now:.3}s ({} total)", self.score.hits);
        }
        if judgement.expired {
            self.score.record_miss();
            log::debug!("target expired at {now:.3}s");
        }
        if judgement.click_missed {
            self.score.record_miss();
            log::debug!("click missed at {now:.3}s");
        }
        if judgement.removes_target() {
            self.target = None;
        }
    }
}
