use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// How the remaining-mines counter moves.
    pub const fn counter_delta(self) -> i16 {
        match self {
            Self::NoChange => 0,
            Self::Flagged => -1,
            Self::Unflagged => 1,
        }
    }
}

impl Grid {
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_mut(coords);

        Ok(match cell.state {
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                FlagOutcome::Flagged
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                FlagOutcome::Unflagged
            }
            CellState::Visible => FlagOutcome::NoChange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip_restores_grid() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let before = grid.clone();

        let placed = grid.toggle_flag((1, 1)).unwrap();
        assert_eq!(placed, FlagOutcome::Flagged);
        assert!(grid[(1, 1)].is_flagged());

        let removed = grid.toggle_flag((1, 1)).unwrap();
        assert_eq!(removed, FlagOutcome::Unflagged);
        assert_eq!(placed.counter_delta() + removed.counter_delta(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn visible_cell_cannot_be_flagged() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        grid.reveal((1, 1)).unwrap();
        let before = grid.clone();

        let outcome = grid.toggle_flag((1, 1)).unwrap();

        assert_eq!(outcome, FlagOutcome::NoChange);
        assert_eq!(outcome.counter_delta(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn flagging_a_safe_cell_is_allowed() {
        let mut grid = Grid::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        assert_eq!(grid.toggle_flag((1, 1)).unwrap(), FlagOutcome::Flagged);
    }
}
