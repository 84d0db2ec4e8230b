use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};

/// Unified input event consumed by the game loop and the end screen
#[derive(Clone, Debug, PartialEq)]
pub enum AimEvent {
    /// Pointer moved (or dragged) over a cell
    Pointer { column: u16, row: u16 },
    /// A mouse button went down over a cell
    Click { column: u16, row: u16 },
    Key(KeyEvent),
    /// The user asked to close the game (Esc / Ctrl+C)
    Close,
    Resize,
}

impl AimEvent {
    /// Map a raw crossterm event; events the game doesn't care about become `None`.
    pub fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(AimEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(AimEvent::Pointer {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c');
                if ctrl_c || key.code == KeyCode::Esc {
                    Some(AimEvent::Close)
                } else {
                    Some(AimEvent::Key(key))
                }
            }
            CtEvent::Resize(_, _) => Some(AimEvent::Resize),
            _ => None,
        }
    }
}

/// Source of terminal input
pub trait EventSource {
    /// Every event queued since the last call, without blocking.
    fn drain(&mut self) -> io::Result<Vec<AimEvent>>;
    /// Block until the next event arrives.
    fn wait(&mut self) -> io::Result<AimEvent>;
}

/// Production event source reading crossterm's queue on the calling thread
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn drain(&mut self) -> io::Result<Vec<AimEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = AimEvent::from_crossterm(event::read()?) {
                events.push(ev);
            }
        }
        Ok(events)
    }

    fn wait(&mut self) -> io::Result<AimEvent> {
        loop {
            if let Some(ev) = AimEvent::from_crossterm(event::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Test event source fed through a channel. A hung-up sender reads as `Close`
/// so a scripted run can never block forever.
pub struct TestEventSource {
    rx: Receiver<AimEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AimEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn drain(&mut self) -> io::Result<Vec<AimEvent>> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ev) => events.push(ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if events.is_empty() {
                        events.push(AimEvent::Close);
                    }
                    break;
                }
            }
        }
        Ok(events)
    }

    fn wait(&mut self) -> io::Result<AimEvent> {
        Ok(self.rx.recv().unwrap_or(AimEvent::Close))
    }
}

/// Configurable ticker interface
pub trait Ticker {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_rate(per_second: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / per_second.max(1) as f64))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Fixed-rate driver: each step sleeps out whatever is left of the tick
/// budget, then hands back the batch of input gathered meanwhile.
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    last_step: Option<Instant>,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            last_step: None,
        }
    }

    pub fn step(&mut self) -> io::Result<Vec<AimEvent>> {
        if let Some(last) = self.last_step {
            let budget = self.ticker.interval();
            let spent = last.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        self.last_step = Some(Instant::now());
        self.event_source.drain()
    }

    /// Block for a single event, bypassing the tick clock.
    pub fn wait(&mut self) -> io::Result<AimEvent> {
        self.event_source.wait()
    }
}
