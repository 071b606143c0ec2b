use smallvec::SmallVec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Lays mines on a blank grid once the first opened cell is known.
pub trait MinefieldGenerator {
    /// Places up to `mines` mines outside the safe zone around `safe` and refreshes adjacency
    /// counts, returning how many mines were actually placed.
    fn place_mines(&mut self, grid: &mut Grid, mines: CellCount, safe: Coord2) -> CellCount;
}

impl<G: MinefieldGenerator + ?Sized> MinefieldGenerator for Box<G> {
    fn place_mines(&mut self, grid: &mut Grid, mines: CellCount, safe: Coord2) -> CellCount {
        (**self).place_mines(grid, mines, safe)
    }
}

/// The opened cell and its in-bounds neighbors.
pub type SafeZone = SmallVec<[Coord2; 9]>;

pub fn safe_zone(grid: &Grid, safe: Coord2) -> SafeZone {
    let mut zone = SafeZone::new();
    zone.push(safe);
    zone.extend(grid.neighbors_of(safe));
    zone
}

/// Every cell outside the safe zone, in row-major order.
pub fn mine_candidates(grid: &Grid, safe: Coord2) -> Vec<Coord2> {
    let forbidden = safe_zone(grid, safe);
    grid.coords()
        .filter(|coords| !forbidden.contains(coords))
        .collect()
}

/// Marks `coords` as mines and recounts the board, returning how many were placed.
pub(crate) fn lay_mines(grid: &mut Grid, coords: &[Coord2]) -> CellCount {
    for &pos in coords {
        grid[pos].is_mine = true;
    }
    grid.recount_adjacent_mines();
    grid.mine_count()
}

pub(crate) fn log_shortfall(requested: CellCount, placed: CellCount) {
    if placed < requested {
        log::warn!(
            "Not enough room outside the safe zone, requested {} mines but placed {}",
            requested,
            placed
        );
    }
}
