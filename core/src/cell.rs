use serde::{Deserialize, Serialize};

/// What a cell holds: its neighbour mine count, or a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Bomb,
}

impl CellValue {
    /// Maps a neighbour mine count to its value, `None` for counts above 8.
    pub const fn from_count(count: u8) -> Option<Self> {
        use CellValue::*;
        Some(match count {
            0 => Empty,
            1 => One,
            2 => Two,
            3 => Three,
            4 => Four,
            5 => Five,
            6 => Six,
            7 => Seven,
            8 => Eight,
            _ => return None,
        })
    }

    /// Neighbour mine count, `None` for bombs.
    pub const fn count(self) -> Option<u8> {
        use CellValue::*;
        Some(match self {
            Empty => 0,
            One => 1,
            Two => 2,
            Three => 3,
            Four => 4,
            Five => 5,
            Six => 6,
            Seven => 7,
            Eight => 8,
            Bomb => return None,
        })
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Not revealed yet.
    Hidden,
    Visible,
    Flagged,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub state: CellState,
    /// Set only on the mine whose reveal lost the game.
    pub detonated: bool,
}

impl Cell {
    pub const fn is_bomb(&self) -> bool {
        self.value.is_bomb()
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self.state, CellState::Visible)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.state, CellState::Hidden)
    }
}
