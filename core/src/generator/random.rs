use rand::prelude::*;

use super::*;

/// Picks mine positions uniformly among the cells outside the safe zone.
pub fn place_mines<R: Rng + ?Sized>(
    grid: &mut Grid,
    mines: CellCount,
    safe: Coord2,
    rng: &mut R,
) -> CellCount {
    let mut candidates = mine_candidates(grid, safe);
    let amount = candidates.len().min(usize::from(mines));
    let (chosen, _) = candidates.partial_shuffle(rng, amount);

    let placed = lay_mines(grid, chosen);
    log_shortfall(mines, placed);
    log::debug!("Placed {} mines avoiding {:?}", placed, safe);
    placed
}

/// Generation strategy that keeps the first opened cell and its neighbors free, other than that
/// purely random.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator {
    rng: SmallRng,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for RandomMinefieldGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn place_mines(&mut self, grid: &mut Grid, mines: CellCount, safe: Coord2) -> CellCount {
        place_mines(grid, mines, safe, &mut self.rng)
    }
}
