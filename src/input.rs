use crate::runtime::AimEvent;
use crate::ui::viewport::Viewport;

/// Logical rectangle covered by one terminal cell; bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CellBounds {
    /// A degenerate cell covering exactly one logical point.
    pub fn point(x: i32, y: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    /// The point of the cell closest to `(x, y)`.
    pub fn closest_to(&self, x: i32, y: i32) -> (i32, i32) {
        (x.clamp(self.left, self.right), y.clamp(self.top, self.bottom))
    }
}

/// Per-tick input snapshot. Pointer coordinates are logical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    /// Centre of the cell under the pointer
    pub pointer_x: i32,
    pub pointer_y: i32,
    /// Everything the pointer's cell covers; a cell is the finest a terminal
    /// click can resolve
    pub pointer_cell: CellBounds,
    pub clicked_this_frame: bool,
    /// Click-downs seen this tick; every one counts toward total clicks
    pub clicks: u32,
    pub close_requested: bool,
}

/// Folds a tick's event batch into an [`InputFrame`]. The pointer position
/// carries over between ticks, like a real mouse cursor.
#[derive(Debug, Default)]
pub struct InputSampler {
    pointer: (u16, u16),
}

impl InputFrame {
    /// Pointer resolved to the logical point nearest `(x, y)` within its cell.
    pub fn aim_point(&self, x: i32, y: i32) -> (i32, i32) {
        self.pointer_cell.closest_to(x, y)
    }
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, events: &[AimEvent], viewport: &Viewport) -> InputFrame {
        let mut clicks = 0;
        let mut close_requested = false;

        for ev in events {
            match *ev {
                AimEvent::Pointer { column, row } => self.pointer = (column, row),
                AimEvent::Click { column, row } => {
                    self.pointer = (column, row);
                    clicks += 1;
                }
                AimEvent::Close => close_requested = true,
                AimEvent::Key(_) | AimEvent::Resize => {}
            }
        }

        let (pointer_x, pointer_y) = viewport.to_logical(self.pointer.0, self.pointer.1);
        InputFrame {
            pointer_x,
            pointer_y,
            pointer_cell: viewport.cell_bounds(self.pointer.0, self.pointer.1),
            clicked_this_frame: clicks > 0,
            clicks,
            close_requested,
        }
    }
}
