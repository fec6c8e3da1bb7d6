use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, WriteLogger};

use wrapsnake::clock::FrameClock;
use wrapsnake::config::Cli;
use wrapsnake::game::Game;
use wrapsnake::input::KeyboardInput;
use wrapsnake::render::TerminalRenderer;

const WINDOW_TITLE: &str = "Snake";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!(
        "Starting {} on a {}x{} board",
        WINDOW_TITLE, config.grid.width, config.grid.height
    );

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let needed = TerminalRenderer::<CrosstermBackend<io::Stdout>>::required_area(config.grid);
    if cols < needed.width || rows < needed.height {
        warn!(
            "Terminal is {}x{}, board needs {}x{}; edges will be cut off",
            cols, rows, needed.width, needed.height
        );
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|terminal| {
            let renderer = TerminalRenderer::new(terminal, config.grid, WINDOW_TITLE);
            let mut game = Game::new(&config, renderer, KeyboardInput, FrameClock::new())?;
            game.run()
        });

    // Restore the terminal even when the game loop failed
    let restored = restore_terminal();
    finish(result, restored)
}

/// Logs both outcomes; the game loop's error wins over a failed restore.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        error!("Game ended with error: {:#}", e);
    }
    if let Err(e) = &restored {
        error!("Failed to restore terminal: {:#}", e);
    }
    result.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}
