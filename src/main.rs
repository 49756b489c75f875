mod app;
mod config;
mod form;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::{AppConfig, IconSet};

#[derive(Parser, Debug)]
#[command(name = "create-account-tui")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "A terminal account-creation screen")]
struct Args {
    /// Read config from this file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw plain ASCII icons (no Nerd Font needed)
    #[arg(long)]
    ascii: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(log_target(&args))?;

    let mut config = if args.print_config {
        AppConfig::read(args.config.as_deref()).await
    } else {
        AppConfig::load(args.config.as_deref()).await
    };
    if args.ascii {
        config.icons = IconSet::Ascii;
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    run_tui(config)
}

#[derive(Debug, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

// The alternate screen owns the terminal while the UI runs, so only
// --print-config may log to stderr.
fn log_target(args: &Args) -> LogTarget {
    if args.print_config {
        return LogTarget::Stderr;
    }
    match args.log_file.clone().or_else(default_log_path) {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Off,
    }
}

fn default_log_path() -> Option<PathBuf> {
    let dir = dirs::state_dir().or_else(dirs::cache_dir)?;
    Some(dir.join("create-account-tui").join("create-account-tui.log"))
}

fn init_logging(target: LogTarget) -> Result<()> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env());

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogTarget::Stderr => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
        LogTarget::Off => registry.init(),
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    tracing::info!("Starting account screen");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.set_viewport(ui::viewport_height(terminal.size()?.height));
        terminal.draw(|f| ui::draw(f, app))?;

        // Every handled event is followed by a redraw
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
