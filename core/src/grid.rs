use core::ops::Index;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// The board: a fixed two-dimensional array of cells with a known number of mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Places `config.mines` mines uniformly at random, without replacement, over the whole grid.
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut cells: Array2<Cell> = Array2::default(config.size.to_nd_index());
        let total = usize::from(config.total_cells());
        let mines = usize::from(config.mines).min(total);
        let cols = usize::from(config.cols());

        for flat in rand::seq::index::sample(rng, total, mines).iter() {
            cells[[flat / cols, flat % cols]].value = CellValue::Bomb;
        }

        let mut grid = Self {
            cells,
            mine_count: 0,
        };
        grid.recompute_values();
        log::debug!(
            "Generated {}x{} grid with {} mines",
            config.rows(),
            config.cols(),
            grid.mine_count
        );
        grid
    }

    /// Builds a grid with mines at exactly `mine_coords`, duplicates collapsed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()].value = CellValue::Bomb;
        }

        let mut grid = Self {
            cells,
            mine_count: 0,
        };
        grid.recompute_values();
        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_bomb()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.coords().map(|coords| (coords, self[coords]))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    pub fn count_in_state(&self, state: CellState) -> CellCount {
        let count = self.cells.iter().filter(|cell| cell.state == state).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    /// Moves the mine at `from` to the mine-free cell `to` and refreshes every count.
    pub fn relocate_mine(&mut self, from: Coord2, to: Coord2) -> Result<()> {
        let from = self.validate_coords(from)?;
        let to = self.validate_coords(to)?;
        if !self.contains_mine(from) || self.contains_mine(to) {
            return Err(GameError::InvalidCoords);
        }

        self.cells[from.to_nd_index()].value = CellValue::Empty;
        self.cells[to.to_nd_index()].value = CellValue::Bomb;
        self.recompute_values();
        log::debug!("Relocated mine from {:?} to {:?}", from, to);
        Ok(())
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    fn recompute_values(&mut self) {
        let mut mine_count = 0;
        for coords in self.coords() {
            if self.contains_mine(coords) {
                mine_count += 1;
                continue;
            }
            let count = self.adjacent_mine_count(coords);
            self.cells[coords.to_nd_index()].value =
                CellValue::from_count(count).unwrap_or(CellValue::Eight);
        }
        self.mine_count = mine_count;
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

/// Source of fresh grids for a session.
pub trait GridGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid;

    /// Moves the mine under `from` somewhere else, used when re-rolling keeps failing.
    fn relocate_mine(&mut self, grid: &mut Grid, from: Coord2) -> Result<()> {
        let to = grid
            .coords()
            .find(|&pos| pos != from && !grid.contains_mine(pos))
            .ok_or(GameError::TooManyMines)?;
        grid.relocate_mine(from, to)
    }
}

/// Purely random generation from a seeded RNG, the same seed yields the same sequence of grids.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    rng: SmallRng,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid {
        Grid::random(config, &mut self.rng)
    }

    fn relocate_mine(&mut self, grid: &mut Grid, from: Coord2) -> Result<()> {
        let free = grid
            .coords()
            .filter(|&pos| pos != from && !grid.contains_mine(pos))
            .choose(&mut self.rng)
            .ok_or(GameError::TooManyMines)?;
        grid.relocate_mine(from, free)
    }
}

/// Always hands out the same layout, for scripted games.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGridGenerator {
    grid: Grid,
}

impl FixedGridGenerator {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl GridGenerator for FixedGridGenerator {
    fn generate(&mut self, _config: GameConfig) -> Grid {
        self.grid.clone()
    }
}
