use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::target::{PlayArea, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SpawnerState {
    Idle,
    Active,
}

/// Fixed-interval spawn gate. The timer runs regardless of the active
/// target; a firing that finds the slot occupied is dropped, never queued.
#[derive(Debug)]
pub struct Spawner {
    interval: f64,
    next_fire: f64,
    radius: i32,
    area: PlayArea,
    rng: StdRng,
}

impl Spawner {
    pub fn new(config: &Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let interval = config.target_interval_ms as f64 / 1000.0;

        Self {
            interval,
            next_fire: interval,
            radius: config.target_radius,
            area: PlayArea::from_config(config),
            rng,
        }
    }

    pub fn state(slot: &Option<Target>) -> SpawnerState {
        match slot {
            Some(_) => SpawnerState::Active,
            None => SpawnerState::Idle,
        }
    }

    pub fn area(&self) -> &PlayArea {
        &self.area
    }

    /// Session time of the next timer firing
    pub fn next_fire(&self) -> f64 {
        self.next_fire
    }

    /// Advance the timer to `now`. Returns true when a new target was put in `slot`.
    pub fn tick(&mut self, now: f64, slot: &mut Option<Target>) -> bool {
        if now < self.next_fire {
            return false;
        }

        // A long stall fires the timer several times; all but the first are
        // dropped because the first fills the slot.
        let fires = ((now - self.next_fire) / self.interval).floor() + 1.0;
        self.next_fire += fires * self.interval;

        if slot.is_some() {
            log::trace!("spawn tick at {now:.3}s dropped, target still active");
            return false;
        }

        let target = self.spawn(now);
        log::debug!(
            "spawned target at ({}, {}) at {now:.3}s",
            target.x,
            target.y
        );
        *slot = Some(target);
        true
    }

    fn spawn(&mut self, now: f64) -> Target {
        let x = self.rng.gen_range(self.area.min_x..=self.area.max_x);
        let y = self.rng.gen_range(self.area.min_y..=self.area.max_y);
        Target::create(x, y, self.radius, now, &self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner() -> Spawner {
        Spawner::new(&Config::default(), Some(7))
    }

    #[test]
    fn nothing_before_first_interval() {
        let mut s = spawner();
        let mut slot = None;
        assert!(!s.tick(0.0, &mut slot));
        assert!(!s.tick(0.99, &mut slot));
        assert_eq!(Spawner::state(&slot), SpawnerState::Idle);
    }

    #[test]
    fn spawns_when_timer_fires_and_idle() {
        let mut s = spawner();
        let mut slot = None;
        assert!(s.tick(1.0, &mut slot));
        assert_eq!(Spawner::state(&slot), SpawnerState::Active);

        let t = slot.unwrap();
        assert_eq!(t.created_at, 1.0);
        assert_eq!(t.radius, 15);
        assert!(s.area().contains(t.x, t.y));
    }

    #[test]
    fn occupied_slot_drops_the_tick() {
        let mut s = spawner();
        let mut slot = None;
        assert!(s.tick(1.0, &mut slot));
        let first = slot;

        assert!(!s.tick(2.0, &mut slot));
        assert_eq!(slot, first);

        // the dropped tick is not carried over: freeing the slot between
        // firings waits for the next one
        slot = None;
        assert!(!s.tick(2.5, &mut slot));
        assert!(s.tick(3.0, &mut slot));
    }

    #[test]
    fn stall_collapses_missed_firings() {
        let mut s = spawner();
        let mut slot = None;
        assert!(s.tick(5.4, &mut slot));
        assert_eq!(s.next_fire(), 6.0);
    }

    #[test]
    fn never_more_than_one_target() {
        let mut s = spawner();
        let mut slot: Option<Target> = None;
        let mut spawned = 0;
        for frame in 0..600 {
            let now = frame as f64 / 60.0;
            if s.tick(now, &mut slot) {
                spawned += 1;
            }
        }
        // slot was never cleared, so only the first firing could spawn
        assert_eq!(spawned, 1);
    }

    #[test]
    fn seeded_spawners_agree() {
        let mut a = spawner();
        let mut b = spawner();
        let (mut sa, mut sb) = (None, None);
        a.tick(1.0, &mut sa);
        b.tick(1.0, &mut sb);
        assert_eq!(sa, sb);
    }
}
