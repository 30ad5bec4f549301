use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{Settings, THEME_DEFAULT};
use grid_snake::engine::{Control, Engine};
use grid_snake::error::{AppError, ConfigError};
use grid_snake::fruit::FruitPlacement;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::timer::Ticker;
use grid_snake::view;
use tracing::info;

/// Poll timeout while no round is running.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square board.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for fruit placement, for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Never place fruit on the snake.
    #[arg(long)]
    avoid_snake: bool,

    /// JSON settings file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (honours `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let settings = resolve_settings(&cli)?;
    info!(?settings, "starting");

    install_panic_hook();
    run(settings)
}

fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        settings.grid_size = grid_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.avoid_snake {
        settings.fruit_placement = FruitPlacement::AvoidSnake;
    }

    settings.validate()
}

fn run(settings: Settings) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut engine = Engine::from_settings(settings);
    let mut ticker = Ticker::new(settings.tick_interval());

    loop {
        session.draw(&view::build(engine.state()), &THEME_DEFAULT)?;

        let timeout = ticker
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL_INTERVAL);
        if let Some(game_input) = input.poll(timeout)? {
            if engine.handle_input(game_input) == Control::Quit {
                break;
            }
        }
        ticker.sync(engine.is_running(), Instant::now());

        if ticker.fire_if_due(Instant::now()) {
            engine.step();
            ticker.sync(engine.is_running(), Instant::now());
        }
    }

    ticker.cancel();
    info!(score = engine.state().score, "quit");
    Ok(())
}
