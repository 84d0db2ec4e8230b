use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::App;
use crate::session::Phase;
use crate::ui::{arena::Arena, end_screen::EndScreen, hud::Hud};

/// A UI screen boundary: draws one phase of the game
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Arena with the target, HUD on top
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        Arena {
            background: &app.background,
            target: app.session.target(),
            viewport: &app.viewport,
        }
        .render(area, buf);

        Hud {
            score: &app.session.score,
            viewport: &app.viewport,
            height: app.config.top_bar_height,
        }
        .render(area, buf);
    }
}

/// Final statistics
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        EndScreen {
            score: &app.session.score,
            viewport: &app.viewport,
        }
        .render(area, buf);
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Running => Box::new(PlayingScreen),
        Phase::Ended => Box::new(ResultsScreen),
    }
}
