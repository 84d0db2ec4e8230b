use crate::input::InputFrame;
use crate::target::Target;

/// What happened to the active target this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Judgement {
    pub hit: bool,
    /// The target outlived its expiry
    pub expired: bool,
    /// A click landed while a target was up but missed it
    pub click_missed: bool,
}

impl Judgement {
    pub fn misses(&self) -> u32 {
        self.expired as u32 + self.click_missed as u32
    }

    pub fn removes_target(&self) -> bool {
        self.hit || self.expired
    }
}

/// Judge the tick's input against the target as it stood at the start of the tick.
///
/// A click counts for the part of its terminal cell nearest the target, so
/// every cell the arena paints yellow is a hit.
///
/// Expiry and a stray click are independent miss sources and can both
/// fire on the same tick. A click on an expired target is not a hit.
pub fn judge(frame: &InputFrame, target: Option<&Target>, now: f64, expiry: f64) -> Judgement {
    let Some(target) = target else {
        return Judgement::default();
    };

    let expired = target.is_expired(now, expiry);
    let (px, py) = frame.aim_point(target.x, target.y);
    let on_target = target.collides(px, py);
    let clicked = frame.clicked_this_frame;

    Judgement {
        hit: clicked && on_target && !expired,
        expired,
        click_missed: clicked && !on_target,
    }
}
