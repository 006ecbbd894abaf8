#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use flag::*;
pub use grid::*;
pub use outcome::*;
pub use reveal::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod error;
mod flag;
mod grid;
mod outcome;
mod reveal;
mod session;
mod snapshot;
mod types;

/// Rows of the classic board.
pub const ROWS: Coord = 10;
/// Columns of the classic board.
pub const COLS: Coord = 10;
/// Mines on the classic board.
pub const NUM_BOMBS: CellCount = 10;
/// The elapsed-seconds counter stops here.
pub const TIME_CAP: u16 = 999;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const CLASSIC: Self = Self::new_unchecked((ROWS, COLS), NUM_BOMBS);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a config, rejecting empty boards and boards without a single safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines >= mult(size.0, size.1) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
