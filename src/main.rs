use std::error::Error;
use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use torus_snake::config::{theme_by_name, GameConfig, Theme, THEME_CLASSIC};
use torus_snake::game::{GameState, GameStatus};
use torus_snake::grid::GridSize;
use torus_snake::input::{poll_input, GameInput};
use torus_snake::renderer;
use torus_snake::settings::{load_settings, save_settings, Settings};
use torus_snake::terminal_runtime::TerminalSession;

const LOG_FILE_NAME: &str = "torus-snake.log";

/// Input poll cadence; ticks run on their own speed-derived interval.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "torus-snake", version, about = "Snake on a wraparound grid")]
struct Cli {
    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Starting speed in logical ticks per second.
    #[arg(long)]
    speed: Option<u32>,

    /// Speed gain per eaten food.
    #[arg(long = "speed-increment")]
    speed_increment: Option<u32>,

    /// Color theme: classic, ocean, or neon.
    #[arg(long)]
    theme: Option<String>,

    /// Seed the RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Save the merged options as new defaults before playing.
    #[arg(long = "write-config")]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Ok(file) = File::create(LOG_FILE_NAME) {
        let _ = WriteLogger::init(LevelFilter::Info, LogConfig::default(), file);
    }

    let settings = merged_settings(&cli);
    let theme = resolve_theme(&settings.theme);

    if cli.write_config {
        match save_settings(&settings) {
            Ok(()) => info!("settings saved"),
            Err(error) => warn!("failed to save settings: {error}"),
        }
    }

    let config = GameConfig {
        grid: GridSize {
            width: settings.grid_width,
            height: settings.grid_height,
        },
        initial_speed: settings.initial_speed,
        speed_increment: settings.speed_increment,
    };

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed)?,
        None => GameState::new(config)?,
    };
    // Open on the start screen; the first Confirm begins play.
    state.status = GameStatus::Paused;

    info!(
        "starting session on a {}x{} grid at speed {}",
        config.grid.width, config.grid.height, config.initial_speed
    );

    run(&mut state, theme)?;

    info!("session ended with score {}", state.score);
    Ok(())
}

fn run(state: &mut GameState, theme: &Theme) -> Result<(), Box<dyn Error>> {
    let mut session = TerminalSession::enter()?;
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state, theme))?;

        if let Some(input) = poll_input()? {
            if input == GameInput::Quit {
                break;
            }
            state.apply_input(input);
        }

        if last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

fn merged_settings(cli: &Cli) -> Settings {
    let mut settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            // Raw mode has not been entered yet, so this stays visible.
            eprintln!("warning: could not read settings file: {error}");
            warn!("could not read settings file: {error}");
            Settings::default()
        }
    };

    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(speed) = cli.speed {
        settings.initial_speed = speed;
    }
    if let Some(increment) = cli.speed_increment {
        settings.speed_increment = increment;
    }
    if let Some(theme) = &cli.theme {
        settings.theme = theme.clone();
    }

    settings
}

fn resolve_theme(name: &str) -> &'static Theme {
    theme_by_name(name).unwrap_or_else(|| {
        eprintln!("warning: unknown theme {name:?}, using classic");
        &THEME_CLASSIC
    })
}
