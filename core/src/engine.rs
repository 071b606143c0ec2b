use web_time::Instant;

use crate::*;

/// Applies open and flag actions to a grid and keeps the game state in step with them.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.size),
            state: GameState::new(config),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Player-visible state of a cell, `None` when out of bounds.
    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        if !self.grid.contains(coords) {
            return None;
        }
        let mines_revealed = matches!(self.state.phase(), GamePhase::Lost);
        Some(self.grid[coords].view(mines_revealed))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.state.is_finished() || !self.grid.contains(coords) {
            return FlagOutcome::NoChange;
        }

        let cell = self.grid[coords];
        if cell.is_open {
            return FlagOutcome::NoChange;
        }

        if cell.is_flagged {
            self.grid[coords].is_flagged = false;
            self.state.return_flag();
        } else if self.state.take_flag() {
            self.grid[coords].is_flagged = true;
        } else {
            log::trace!("No flags left for {:?}", coords);
            return FlagOutcome::NoChange;
        }

        FlagOutcome::Changed {
            flagged: !cell.is_flagged,
            flags_remaining: self.state.flags_remaining(),
        }
    }

    /// Opens a closed cell, laying mines first when this is the first open of the game.
    pub fn open<G>(&mut self, coords: Coord2, generator: &mut G, now: Instant) -> RevealOutcome
    where
        G: MinefieldGenerator + ?Sized,
    {
        if self.state.is_finished() || !self.grid.contains(coords) {
            return RevealOutcome::NoChange;
        }

        let cell = self.grid[coords];
        if cell.is_open || cell.is_flagged {
            return RevealOutcome::NoChange;
        }

        if self.state.phase().is_idle() {
            let placed = generator.place_mines(&mut self.grid, self.config.mines, coords);
            self.state.start(now, self.grid.total_cells(), placed);
            log::debug!("First open at {:?}", coords);
        }

        if self.grid[coords].is_mine {
            return self.explode(coords, now);
        }

        let opened = self.flood_open(coords);
        let count = CellCount::try_from(opened.len()).unwrap_or(CellCount::MAX);
        self.state.record_opened(count);

        if self.state.all_safe_opened() {
            self.state.finish(true, now);
            RevealOutcome::Won(opened)
        } else {
            RevealOutcome::Opened(opened)
        }
    }

    /// Opens `start` and every cell reachable through zero-count cells.
    fn flood_open(&mut self, start: Coord2) -> Vec<OpenedCell> {
        let mut opened = Vec::new();
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = self.grid[coords];
            // skip flagged or already opened cells
            if cell.is_open || cell.is_flagged {
                continue;
            }

            self.grid[coords].is_open = true;
            opened.push(OpenedCell {
                row: coords.0,
                col: coords.1,
                adjacent: cell.adjacent_mines,
            });
            log::trace!("Opened cell at {:?}, mine count: {}", coords, cell.adjacent_mines);

            // numbered cells bound the flood
            if cell.adjacent_mines == 0 {
                to_visit.extend(self.grid.neighbors_of(coords).filter(|&pos| {
                    let neighbor = self.grid[pos];
                    !neighbor.is_mine && !neighbor.is_open && !neighbor.is_flagged
                }));
            }
        }

        opened
    }

    fn explode(&mut self, coords: Coord2, now: Instant) -> RevealOutcome {
        self.grid[coords].exploded = true;
        self.triggered_mine = Some(coords);
        self.state.finish(false, now);
        log::debug!("Mine hit at {:?}", coords);

        RevealOutcome::Exploded {
            at: coords,
            mines: self.grid.mine_coords(),
        }
    }
}
