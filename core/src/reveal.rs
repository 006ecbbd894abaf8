use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was already visible or flagged.
    NoChange,
    /// Safe cells were opened, with how many.
    Revealed(CellCount),
    /// Target was a mine, it is now visible.
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Grid {
    /// Opens the cell at `coords`, flooding outward from empty cells.
    ///
    /// Flood fill walks the 8-connected graph with an explicit worklist. Only hidden cells are entered, so a flagged
    /// or already visible cell stops the cascade. Empty cells expand, numbered cells are opened but not expanded.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self[coords];

        if !cell.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        self.cell_mut(coords).state = CellState::Visible;

        if cell.is_bomb() {
            log::debug!("Mine opened at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        log::debug!("Open cell at {:?}, value: {:?}", coords, cell.value);
        let mut opened: CellCount = 1;

        if cell.value.is_empty() {
            let mut visited: HashSet<_> = HashSet::from([coords]);
            let mut to_visit: VecDeque<_> = self
                .iter_neighbors(coords)
                .filter(|&pos| self[pos].is_hidden())
                .collect();
            log::trace!(
                "Starting flood-fill from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                let visit_cell = self[visit_coords];
                // an empty region never borders a mine, but flags and opened cells still stop the walk
                if !visit_cell.is_hidden() || visit_cell.is_bomb() {
                    log::trace!("Skipping cell at {:?}", visit_coords);
                    continue;
                }

                self.cell_mut(visit_coords).state = CellState::Visible;
                opened += 1;
                log::trace!(
                    "Flood opened cell at {:?}, value: {:?}",
                    visit_coords,
                    visit_cell.value
                );

                if visit_cell.value.is_empty() {
                    to_visit.extend(
                        self.iter_neighbors(visit_coords)
                            .filter(|&pos| self[pos].is_hidden())
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        Ok(RevealOutcome::Revealed(opened))
    }
}
