use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Lost,
    Won,
}

impl Outcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Checks for a win after a reveal that did not hit a mine.
///
/// The game is won once every safe cell is visible. On a win every mine gets flagged.
pub fn evaluate(grid: &mut Grid) -> Outcome {
    let pending = grid
        .iter_cells()
        .any(|(_, cell)| !cell.is_bomb() && !cell.is_visible());
    if pending {
        return Outcome::Ongoing;
    }

    for coords in grid.coords() {
        if grid.contains_mine(coords) {
            grid.cell_mut(coords).state = CellState::Flagged;
        }
    }
    Outcome::Won
}

/// Losing path: marks the triggering mine and shows every mine.
pub fn expose_mines(grid: &mut Grid, detonated: Coord2) -> Outcome {
    for coords in grid.coords() {
        if grid.contains_mine(coords) {
            let cell = grid.cell_mut(coords);
            cell.state = CellState::Visible;
            cell.detonated = coords == detonated;
        }
    }
    Outcome::Lost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_safe_visible_is_won_and_flags_mines() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        for coords in grid.coords() {
            if !grid.contains_mine(coords) {
                grid.reveal(coords).unwrap();
            }
        }
        assert!(grid[(0, 0)].is_hidden());

        assert_eq!(evaluate(&mut grid), Outcome::Won);
        assert!(grid[(0, 0)].is_flagged());
        assert!(grid[(2, 2)].is_flagged());
        assert_eq!(grid.count_in_state(CellState::Visible), 7);
    }

    #[test]
    fn hidden_safe_cell_keeps_game_going() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        grid.reveal((1, 1)).unwrap();
        let before = grid.clone();

        assert_eq!(evaluate(&mut grid), Outcome::Ongoing);
        assert_eq!(grid, before);
    }

    #[test]
    fn flags_on_safe_cells_do_not_count_as_cleared() {
        let mut grid = Grid::from_mine_coords((1, 3), &[(0, 0)]).unwrap();
        grid.reveal((0, 1)).unwrap();
        grid.toggle_flag((0, 2)).unwrap();

        assert_eq!(evaluate(&mut grid), Outcome::Ongoing);
    }

    #[test]
    fn expose_mines_detonates_exactly_one() {
        let mut grid = Grid::from_mine_coords((3, 3), &[(0, 0), (2, 2), (0, 2)]).unwrap();
        grid.toggle_flag((0, 2)).unwrap();
        grid.reveal((2, 2)).unwrap();

        assert_eq!(expose_mines(&mut grid, (2, 2)), Outcome::Lost);

        let detonated: alloc::vec::Vec<_> = grid
            .iter_cells()
            .filter(|(_, cell)| cell.detonated)
            .map(|(coords, _)| coords)
            .collect();
        assert_eq!(detonated, [(2, 2)]);
        for coords in [(0, 0), (2, 2), (0, 2)] {
            assert!(grid[coords].is_visible());
        }
        assert!(grid[(1, 1)].is_hidden());
    }
}
