use ratatui::layout::Rect;

use crate::input::CellBounds;

/// Maps terminal cells onto the fixed logical play surface and back.
///
/// Each cell covers `cell_width() × cell_height()` logical units. A cell is
/// drawn as two stacked half-cell samples, so vertical resolution is doubled
/// when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub logical_width: i32,
    pub logical_height: i32,
}

impl Viewport {
    pub fn new(area: Rect, logical_width: i32, logical_height: i32) -> Self {
        Self {
            area,
            logical_width,
            logical_height,
        }
    }

    pub fn cell_width(&self) -> f64 {
        self.logical_width as f64 / self.area.width.max(1) as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.logical_height as f64 / self.area.height.max(1) as f64
    }

    /// Logical point at the centre of a terminal cell, clamped to the surface.
    pub fn to_logical(&self, column: u16, row: u16) -> (i32, i32) {
        let col = column.saturating_sub(self.area.x).min(self.area.width.saturating_sub(1));
        let row = row.saturating_sub(self.area.y).min(self.area.height.saturating_sub(1));

        let x = ((col as f64 + 0.5) * self.cell_width()).floor() as i32;
        let y = ((row as f64 + 0.5) * self.cell_height()).floor() as i32;
        (
            x.clamp(0, self.logical_width - 1),
            y.clamp(0, self.logical_height - 1),
        )
    }

    /// Logical rectangle covered by a terminal cell, clamped like `to_logical`.
    pub fn cell_bounds(&self, column: u16, row: u16) -> CellBounds {
        let col = column.saturating_sub(self.area.x).min(self.area.width.saturating_sub(1));
        let row = row.saturating_sub(self.area.y).min(self.area.height.saturating_sub(1));

        let left = (col as f64 * self.cell_width()).floor() as i32;
        let top = (row as f64 * self.cell_height()).floor() as i32;
        let right = ((col as f64 + 1.0) * self.cell_width()).ceil() as i32 - 1;
        let bottom = ((row as f64 + 1.0) * self.cell_height()).ceil() as i32 - 1;

        let max_x = self.logical_width - 1;
        let max_y = self.logical_height - 1;
        CellBounds {
            left: left.clamp(0, max_x),
            top: top.clamp(0, max_y),
            right: right.max(left).clamp(0, max_x),
            bottom: bottom.max(top).clamp(0, max_y),
        }
    }

    /// Terminal cell containing a logical point, clamped to the area.
    pub fn to_cell(&self, x: i32, y: i32) -> (u16, u16) {
        let col = (x as f64 / self.cell_width()).floor().max(0.0) as u16;
        let row = (y as f64 / self.cell_height()).floor().max(0.0) as u16;
        (
            self.area.x + col.min(self.area.width.saturating_sub(1)),
            self.area.y + row.min(self.area.height.saturating_sub(1)),
        )
    }

    /// Column for a logical x, without clamping to the right edge.
    pub fn column_for(&self, x: i32) -> u16 {
        self.area.x + (x as f64 / self.cell_width()).floor().max(0.0) as u16
    }

    /// Row for a logical y, without clamping to the bottom edge.
    pub fn row_for(&self, y: i32) -> u16 {
        self.area.y + (y as f64 / self.cell_height()).floor().max(0.0) as u16
    }

    /// Number of rows needed to cover logical heights `0..height`; at least one.
    pub fn rows_covering(&self, height: i32) -> u16 {
        let rows = (height as f64 / self.cell_height()).ceil() as u16;
        rows.clamp(1, self.area.height.max(1))
    }

    /// Logical centres of the upper and lower halves of a cell.
    pub fn half_cell_centres(&self, column: u16, row: u16) -> ((f64, f64), (f64, f64)) {
        let col = column.saturating_sub(self.area.x) as f64;
        let row = row.saturating_sub(self.area.y) as f64;
        let x = (col + 0.5) * self.cell_width();
        let half = self.cell_height() / 2.0;
        let top = row * self.cell_height() + half / 2.0;
        ((x, top), (x, top + half))
    }
}
