use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::background::FALLBACK_COLOR;
use crate::runtime::AimEvent;
use crate::score::{format_time, ScoreTracker};
use crate::ui::viewport::Viewport;

/// Logical y of each stats line
const LINE_Y: [i32; 4] = [100, 200, 300, 400];

/// Final statistics, horizontally centred on a flat backdrop.
pub struct EndScreen<'a> {
    pub score: &'a ScoreTracker,
    pub viewport: &'a Viewport,
}

impl EndScreen<'_> {
    pub fn lines(score: &ScoreTracker) -> [String; 4] {
        [
            format!("Time: {}", format_time(score.elapsed)),
            format!("Speed: {:.1} t/s", score.speed()),
            format!("Hits: {}", score.hits),
            format!("Accuracy: {:.1}%", score.accuracy()),
        ]
    }

    /// Any key or a close request leaves the end screen.
    pub fn dismisses(ev: &AimEvent) -> bool {
        matches!(ev, AimEvent::Key(_) | AimEvent::Close)
    }
}

impl Widget for EndScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(FALLBACK_COLOR).fg(Color::White);
        Clear.render(area, buf);
        Block::default().style(style).render(area, buf);

        let mut next_free = area.top();
        for (line, y) in Self::lines(self.score).iter().zip(LINE_Y) {
            let row = self.viewport.row_for(y).max(next_free);
            if row >= area.bottom() {
                break;
            }
            let width = (line.width() as u16).min(area.width);
            let column = area.x + (area.width - width) / 2;
            buf.set_stringn(column, row, line, width as usize, style);
            next_free = row + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn row_text(buf: &Buffer, row: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, row)].symbol())
            .collect()
    }

    fn render(score: &ScoreTracker, area: Rect) -> Buffer {
        let viewport = Viewport::new(area, 1600, 900);
        let mut buf = Buffer::empty(area);
        EndScreen {
            score,
            viewport: &viewport,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn lines_for_a_scoreless_run() {
        let mut score = ScoreTracker::new(3);
        score.set_elapsed(6.8);
        let [time, speed, hits, accuracy] = EndScreen::lines(&score);
        assert_eq!(time, "Time: 00:06.8");
        assert_eq!(speed, "Speed: 0.0 t/s");
        assert_eq!(hits, "Hits: 0");
        assert_eq!(accuracy, "Accuracy: 0.0%");
    }

    #[test]
    fn lines_are_centred_on_their_rows() {
        let mut score = ScoreTracker::new(3);
        score.set_elapsed(10.0);
        score.hits = 5;
        score.total_clicks = 8;
        let buf = render(&score, Rect::new(0, 0, 200, 50));

        // 100 / 18 units per row
        let row = row_text(&buf, 5);
        assert_eq!(row.trim(), "Time: 00:10.0");
        let lead = row.len() - row.trim_start().len();
        let trail = row.len() - row.trim_end().len();
        assert!(lead.abs_diff(trail) <= 1);

        assert_eq!(row_text(&buf, 22).trim(), "Accuracy: 62.5%");
    }

    #[test]
    fn short_terminal_keeps_lines_apart() {
        let score = ScoreTracker::new(3);
        let buf = render(&score, Rect::new(0, 0, 40, 4));
        assert!(row_text(&buf, 0).contains("Time"));
        assert!(row_text(&buf, 1).contains("Speed"));
        assert!(row_text(&buf, 2).contains("Hits"));
        assert!(row_text(&buf, 3).contains("Accuracy"));
    }

    #[test]
    fn keys_and_close_dismiss_but_mouse_does_not() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(EndScreen::dismisses(&AimEvent::Key(key)));
        assert!(EndScreen::dismisses(&AimEvent::Close));
        assert!(!EndScreen::dismisses(&AimEvent::Click { column: 1, row: 1 }));
        assert!(!EndScreen::dismisses(&AimEvent::Resize));
    }
}
