use std::io;
use std::time::Instant;

use ratatui::{backend::Backend, layout::Rect, Terminal};

use crate::background::Background;
use crate::config::Config;
use crate::input::InputSampler;
use crate::runtime::{AimEvent, EventSource, Runner, Ticker};
use crate::session::{Phase, Session};
use crate::ui::{self, end_screen::EndScreen, viewport::Viewport};

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The last life went this tick; show the end screen
    Ended,
    /// Close was requested; leave right away, skipping the end screen
    Quit,
}

/// The game loop's state: one session plus what's needed to read input and draw it.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub session: Session,
    pub background: Background,
    pub viewport: Viewport,
    sampler: InputSampler,
}

impl App {
    pub fn new(config: Config, background: Background, seed: Option<u64>, area: Rect) -> Self {
        let viewport = Viewport::new(area, config.width, config.height);
        Self {
            session: Session::new(&config, seed),
            background,
            viewport,
            sampler: InputSampler::new(),
            config,
        }
    }

    /// Track the drawable area; called before every draw.
    pub fn resize(&mut self, area: Rect) {
        self.viewport.area = area;
    }

    /// One game-loop tick over the batch of events gathered since the last one.
    pub fn tick(&mut self, events: &[AimEvent], now: f64) -> Flow {
        let frame = self.sampler.sample(events, &self.viewport);
        if frame.close_requested {
            log::info!("close requested at {now:.2}s");
            return Flow::Quit;
        }

        let was_running = self.session.is_running();
        match self.session.step(now, &frame) {
            Phase::Running => Flow::Continue,
            Phase::Ended if was_running => {
                log::info!("phase -> {}", Phase::Ended);
                Flow::Ended
            }
            Phase::Ended => Flow::Ended,
        }
    }
}

/// How a run left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Closed mid-game; the end screen was never shown
    Closed,
    /// The end screen was shown and then dismissed
    Dismissed,
}

/// Drive the game at the runner's fixed rate until the session ends or the
/// player closes it, then hold the end screen until it is dismissed.
pub fn run<B, E, T>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut Runner<E, T>,
) -> io::Result<Exit>
where
    B: Backend,
    E: EventSource,
    T: Ticker,
{
    log::info!("session started");
    let started = Instant::now();

    loop {
        let events = runner.step()?;
        let now = started.elapsed().as_secs_f64();
        match app.tick(&events, now) {
            Flow::Continue => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            Flow::Ended => break,
            Flow::Quit => return Ok(Exit::Closed),
        }
    }

    terminal.draw(|f| ui::draw(app, f))?;
    loop {
        let ev = runner.wait()?;
        if EndScreen::dismisses(&ev) {
            log::info!("end screen dismissed");
            return Ok(Exit::Dismissed);
        }
        if ev == AimEvent::Resize {
            terminal.draw(|f| ui::draw(app, f))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn app() -> App {
        App::new(
            Config::default(),
            Background::solid(),
            Some(3),
            Rect::new(0, 0, 200, 50),
        )
    }

    #[test]
    fn quiet_ticks_continue() {
        let mut app = app();
        assert_eq!(app.tick(&[], 0.0), Flow::Continue);
        assert_eq!(app.tick(&[], 1.0), Flow::Continue);
        assert!(app.session.target().is_some());
    }

    #[test]
    fn close_quits_before_anything_is_judged() {
        let mut app = app();
        app.tick(&[], 1.0);
        let events = [AimEvent::Click { column: 0, row: 0 }, AimEvent::Close];
        assert_eq!(app.tick(&events, 1.1), Flow::Quit);
        assert_eq!(app.session.score.total_clicks, 0);
        assert_eq!(app.session.score.misses, 0);
    }

    #[test]
    fn click_goes_through_the_viewport() {
        let mut app = app();
        app.tick(&[], 1.0);
        let t = *app.session.target().unwrap();
        let (column, row) = app.viewport.to_cell(t.x, t.y);

        app.tick(&[AimEvent::Click { column, row }], 1.1);
        assert_eq!(app.session.score.hits, 1);
    }

    #[test]
    fn running_out_of_lives_ends() {
        let mut app = app();
        let mut flow = Flow::Continue;
        // no input at all: targets expire one after another
        for frame in 0..(60 * 20) {
            flow = app.tick(&[], frame as f64 / 60.0);
            if flow != Flow::Continue {
                break;
            }
        }
        assert_matches!(flow, Flow::Ended);
        assert_eq!(app.session.score.misses, 3);
        assert_eq!(app.session.score.hits, 0);
    }

    #[test]
    fn resize_updates_the_mapping() {
        let mut app = app();
        app.resize(Rect::new(0, 0, 100, 25));
        assert_eq!(app.viewport.cell_width(), 16.0);
    }
}
