use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a session for rendering: the board plus the header counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub mood: Mood,
    pub remaining_mines: i16,
    pub elapsed_seconds: u16,
    pub grid: Grid,
}

impl Snapshot {
    pub fn from_session<G: GridGenerator>(session: &Session<G>) -> Self {
        Self {
            state: session.state(),
            mood: session.mood(),
            remaining_mines: session.remaining_mines(),
            elapsed_seconds: session.elapsed_seconds(),
            grid: session.grid().clone(),
        }
    }

    /// The mine that ended the game, if it was lost.
    pub fn detonated(&self) -> Option<Coord2> {
        self.grid
            .iter_cells()
            .find(|(_, cell)| cell.detonated)
            .map(|(coords, _)| coords)
    }
}
