use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin},
    path::{Path, PathBuf},
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use flik::{
    app::{self, App, Exit},
    background::Background,
    config::{ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, FixedTicker, Runner},
};

/// click the targets before they fade; three misses and you're out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal aim trainer. Targets pop up once a second and fade after 1.75s. Click them with the mouse; every expired target or stray click costs a life. Esc or Ctrl+C quits."
)]
pub struct Cli {
    /// background image stretched over the arena (flat fill if it can't be read)
    #[clap(short = 'b', long, default_value = "background.jpg")]
    background: PathBuf,

    /// JSON file with game constants (defaults to the user config dir)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// seed for target placement, random when omitted
    #[clap(long)]
    seed: Option<u64>,

    /// append logs to this file instead of stderr
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    log::debug!("config path {}", store.path().display());
    let config = store.load();
    let background =
        Background::load_or_fallback(&cli.background, config.width as u32, config.height as u32);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(
        config,
        background,
        cli.seed,
        Rect::new(0, 0, size.width, size.height),
    );
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::from_rate(app.config.frame_rate),
    );
    let result = app::run(&mut terminal, &mut app, &mut runner);

    // restore the terminal whatever the loop returned
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    match result? {
        Exit::Closed => log::info!("closed"),
        Exit::Dismissed => log::info!("finished"),
    }
    Ok(())
}
