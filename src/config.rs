use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;
use thiserror::Error;

use crate::board::Size;

/// Largest board whose frame still fits in terminal coordinates, two columns per cell.
pub const MAX_GRID: Size = Size {
    width: (u16::MAX - 2) / 2,
    height: u16::MAX - 2,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("cell size {cell_size} does not divide the {width}x{height} screen")]
    UnevenCells {
        width: u16,
        height: u16,
        cell_size: u16,
    },
    #[error("board must be at least 2x2 cells, got {width}x{height}")]
    BoardTooSmall { width: u16, height: u16 },
    #[error("board must be at most {max_width}x{max_height} cells, got {width}x{height}")]
    BoardTooLarge {
        width: u16,
        height: u16,
        max_width: u16,
        max_height: u16,
    },
    #[error("speed must be at least one tick per second")]
    ZeroSpeed,
}

#[derive(Parser, Debug)]
#[command(name = "wrapsnake")]
#[command(version, about = "Snake on a wrap-around board")]
pub struct Cli {
    /// Screen width in pixel units
    #[arg(long, default_value_t = 640)]
    pub screen_width: u16,

    /// Screen height in pixel units
    #[arg(long, default_value_t = 480)]
    pub screen_height: u16,

    /// Side of one board cell in pixel units
    #[arg(long, default_value_t = 20)]
    pub cell_size: u16,

    /// Ticks per second
    #[arg(long, default_value_t = 5)]
    pub speed: u32,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid: Size,
    pub speed: u32,
    pub seed: Option<u64>,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let grid = grid_size(self.screen_width, self.screen_height, self.cell_size)?;
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        Ok(GameConfig {
            grid,
            speed: self.speed,
            seed: self.seed,
        })
    }
}

/// Number of cells across and down a screen split into `cell_size` squares.
pub fn grid_size(width: u16, height: u16, cell_size: u16) -> Result<Size, ConfigError> {
    if cell_size == 0 {
        return Err(ConfigError::ZeroCellSize);
    }
    if width % cell_size != 0 || height % cell_size != 0 {
        return Err(ConfigError::UnevenCells {
            width,
            height,
            cell_size,
        });
    }

    let grid = Size {
        width: width / cell_size,
        height: height / cell_size,
    };
    if grid.width < 2 || grid.height < 2 {
        return Err(ConfigError::BoardTooSmall {
            width: grid.width,
            height: grid.height,
        });
    }
    if grid.width > MAX_GRID.width || grid.height > MAX_GRID.height {
        return Err(ConfigError::BoardTooLarge {
            width: grid.width,
            height: grid.height,
            max_width: MAX_GRID.width,
            max_height: MAX_GRID.height,
        });
    }
    Ok(grid)
}
