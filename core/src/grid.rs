use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Every cell starts closed, unflagged and mine-free.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in self.neighbors_of(coords) {
            if self[pos].is_mine {
                count += 1;
            }
        }
        count
    }

    /// Refreshes the adjacency count of every non-mine cell.
    pub fn recount_adjacent_mines(&mut self) {
        for coords in self.coords() {
            let count = if self[coords].is_mine {
                0
            } else {
                self.count_adjacent_mines(coords)
            };
            self[coords].adjacent_mines = count;
        }
    }

    pub fn mine_count(&self) -> CellCount {
        let count = self.cells.iter().filter(|cell| cell.is_mine).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.coords().filter(|&coords| self[coords].is_mine).collect()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
