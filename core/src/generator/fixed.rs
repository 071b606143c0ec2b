use super::*;

/// Places mines at predetermined coordinates, for replays and deterministic boards.
///
/// Coordinates that fall outside the grid or inside the safe zone are skipped, so the first open
/// is still guaranteed safe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMinefieldGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mine_coords: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mine_coords: mine_coords.into(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn place_mines(&mut self, grid: &mut Grid, mines: CellCount, safe: Coord2) -> CellCount {
        let forbidden = safe_zone(grid, safe);
        let mut chosen: Vec<Coord2> = Vec::with_capacity(self.mine_coords.len());
        for &coords in &self.mine_coords {
            if !grid.contains(coords) || forbidden.contains(&coords) {
                log::warn!("Skipping fixed mine at {:?}", coords);
                continue;
            }
            if !chosen.contains(&coords) {
                chosen.push(coords);
            }
        }
        chosen.truncate(usize::from(mines));

        let placed = lay_mines(grid, &chosen);
        log_shortfall(mines, placed);
        placed
    }
}
