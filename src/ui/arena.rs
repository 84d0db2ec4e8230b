use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::background::Background;
use crate::target::Target;
use crate::ui::viewport::Viewport;

pub const TARGET_COLOR: Color = Color::Yellow;

/// Upper half block; fg paints the top sample, bg the bottom one.
const HALF_BLOCK: &str = "▀";

/// Backdrop plus the active target, two logical samples per cell.
pub struct Arena<'a> {
    pub background: &'a Background,
    pub target: Option<&'a Target>,
    pub viewport: &'a Viewport,
}

impl Arena<'_> {
    fn color_at(&self, x: f64, y: f64) -> Color {
        match self.target {
            Some(t) if t.collides_f(x, y) => TARGET_COLOR,
            _ => self.background.sample(x, y),
        }
    }
}

impl Widget for Arena<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                let ((x, top), (_, bottom)) = self.viewport.half_cell_centres(column, row);
                let upper = self.color_at(x, top);
                let lower = self.color_at(x, bottom);
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }

        // On coarse grids no sample may land inside the circle; the cell
        // holding the centre is always painted.
        if let Some(t) = self.target {
            let (column, row) = self.viewport.to_cell(t.x, t.y);
            if area.contains((column, row).into()) {
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(TARGET_COLOR)
                        .set_bg(TARGET_COLOR);
                }
            }
        }
    }
}
