use serde::{Deserialize, Serialize};

/// Canonical per-cell data stored by the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_open: bool,
    pub is_flagged: bool,
    pub exploded: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// What the player sees; mines show up only once revealed by a loss.
    pub const fn view(self, mines_revealed: bool) -> CellView {
        if self.exploded {
            CellView::ExplodedMine
        } else if self.is_open {
            CellView::Open(self.adjacent_mines)
        } else if self.is_mine && mines_revealed {
            CellView::Mine
        } else if self.is_flagged {
            CellView::Flagged
        } else {
            CellView::Closed
        }
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "adjacent", rename_all = "snake_case")]
pub enum CellView {
    Closed,
    Open(u8),
    Flagged,
    Mine,
    ExplodedMine,
}

impl CellView {
    pub const fn adjacent_count(self) -> Option<u8> {
        match self {
            Self::Open(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Closed
    }
}
