pub mod arena;
pub mod end_screen;
pub mod hud;
pub mod screen;
pub mod viewport;

use ratatui::Frame;

use crate::app::App;

/// Draw whichever screen the session's phase calls for, full-frame.
pub fn draw(app: &mut App, f: &mut Frame) {
    let area = f.area();
    app.resize(area);
    screen::current_screen(app.session.phase()).render(app, area, f.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::Background;
    use crate::config::Config;
    use crate::runtime::AimEvent;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn running_session_draws_the_hud() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut app = App::new(
            Config::default(),
            Background::solid(),
            Some(1),
            Rect::new(0, 0, 80, 24),
        );

        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Lives: 3"));
        assert!(!text.contains("Accuracy"));
        // viewport follows the real frame
        assert_eq!(app.viewport.area, Rect::new(0, 0, 120, 30));
    }

    #[test]
    fn ended_session_draws_the_results() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut app = App::new(
            Config::default(),
            Background::solid(),
            Some(1),
            Rect::new(0, 0, 120, 30),
        );
        app.tick(&[], 1.0);
        for now in [1.1, 1.2, 1.3] {
            app.tick(&[AimEvent::Click { column: 0, row: 0 }], now);
        }
        assert!(!app.session.is_running());

        terminal.draw(|f| draw(&mut app, f)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Accuracy: 0.0%"));
        assert!(!text.contains("Lives"));
    }
}
