use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::score::{format_time, ScoreTracker};
use crate::ui::viewport::Viewport;

pub const HUD_COLOR: Color = Color::Rgb(169, 169, 169);
const TEXT_COLOR: Color = Color::Black;

/// Logical x of each label, in draw order
const LABEL_X: [i32; 4] = [5, 200, 450, 650];
const LABEL_Y: i32 = 5;

/// Opaque status strip across the top of the arena.
pub struct Hud<'a> {
    pub score: &'a ScoreTracker,
    pub viewport: &'a Viewport,
    pub height: i32,
}

impl Hud<'_> {
    pub fn labels(score: &ScoreTracker) -> [String; 4] {
        [
            format!("Time: {}", format_time(score.elapsed)),
            format!("Speed: {:.1} t/s", score.speed()),
            format!("Hits: {}", score.hits),
            format!("Lives: {}", score.lives_left()),
        ]
    }
}

impl Widget for Hud<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.viewport.rows_covering(self.height).min(area.height);
        let strip = Rect::new(area.x, area.y, area.width, rows);
        let style = Style::default().bg(HUD_COLOR).fg(TEXT_COLOR);

        Clear.render(strip, buf);
        Block::default().style(style).render(strip, buf);

        let y = self.viewport.row_for(LABEL_Y).min(strip.bottom().saturating_sub(1));
        // labels keep their own x, but never overlap on narrow terminals
        let mut next_free = strip.left();
        for (label, x) in Self::labels(self.score).iter().zip(LABEL_X) {
            let column = self.viewport.column_for(x).max(next_free);
            if column >= strip.right() {
                break;
            }
            let room = (strip.right() - column) as usize;
            buf.set_stringn(column, y, label, room, style);
            next_free = column.saturating_add(label.width() as u16 + 1);
        }
    }
}
