use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Notifications for the presentation layer, emitted in the order they happen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Opened {
        cells: Vec<OpenedCell>,
    },
    FlagChanged {
        row: Coord,
        col: Coord,
        flagged: bool,
        flags_remaining: CellCount,
    },
    /// The opened mine; `mines` lists every mine, all of which are now revealed
    Exploded {
        row: Coord,
        col: Coord,
        mines: Vec<Coord2>,
    },
    GameOver {
        won: bool,
        elapsed_secs: u64,
    },
}

/// Snapshot of the counters a status bar shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub phase: GamePhase,
    pub flags_remaining: CellCount,
    pub opened_safe: CellCount,
    /// `rows*cols - mines` until the first open, then the safe cells left by the mines actually
    /// placed, which is larger when the board was too small for the requested count.
    pub total_safe: CellCount,
    pub elapsed_secs: u64,
}

/// One game from configuration to restart, driving the engine from player actions.
///
/// Actions are processed to completion one at a time; share a session between threads only
/// behind a lock.
#[derive(Clone, Debug)]
pub struct Session<G = RandomMinefieldGenerator> {
    engine: PlayEngine,
    generator: G,
}

impl Session<RandomMinefieldGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn with_entropy(config: GameConfig) -> Self {
        Self::new(config, RandomMinefieldGenerator::from_entropy())
    }
}

impl<G: MinefieldGenerator> Session<G> {
    pub fn new(config: GameConfig, generator: G) -> Self {
        log::debug!("New session {}", config);
        Self {
            engine: PlayEngine::new(config),
            generator,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    /// Starts over with the same configuration.
    pub fn restart(&mut self) {
        self.restart_with(self.engine.config());
    }

    /// Starts over with another configuration, the board is rebuilt from scratch.
    pub fn restart_with(&mut self, config: GameConfig) {
        log::debug!("Restarting session {}", config);
        self.engine = PlayEngine::new(config);
    }

    /// Validates the dimensions and starts over; on error the current game is left untouched.
    pub fn new_game(&mut self, rows: i64, cols: i64, mines: i64) -> Result<()> {
        let config = GameConfig::new(rows, cols, mines)?;
        self.restart_with(config);
        Ok(())
    }

    pub fn open(&mut self, coords: Coord2) -> Vec<GameEvent> {
        self.open_at(coords, Instant::now())
    }

    /// Same as [`Session::open`] with an explicit clock reading.
    pub fn open_at(&mut self, coords: Coord2, now: Instant) -> Vec<GameEvent> {
        match self.engine.open(coords, &mut self.generator, now) {
            RevealOutcome::NoChange => Vec::new(),
            RevealOutcome::Opened(cells) => vec![GameEvent::Opened { cells }],
            RevealOutcome::Won(cells) => vec![GameEvent::Opened { cells }, self.game_over(now)],
            RevealOutcome::Exploded { at, mines } => vec![
                GameEvent::Exploded {
                    row: at.0,
                    col: at.1,
                    mines,
                },
                self.game_over(now),
            ],
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Vec<GameEvent> {
        match self.engine.toggle_flag(coords) {
            FlagOutcome::NoChange => Vec::new(),
            FlagOutcome::Changed {
                flagged,
                flags_remaining,
            } => vec![GameEvent::FlagChanged {
                row: coords.0,
                col: coords.1,
                flagged,
                flags_remaining,
            }],
        }
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.engine.cell_view(coords)
    }

    pub fn summary(&self) -> Summary {
        self.summary_at(Instant::now())
    }

    pub fn summary_at(&self, now: Instant) -> Summary {
        let state = self.engine.state();
        Summary {
            phase: state.phase(),
            flags_remaining: state.flags_remaining(),
            opened_safe: state.opened_safe(),
            total_safe: state.total_safe(),
            elapsed_secs: state.elapsed_secs(now),
        }
    }

    fn game_over(&self, now: Instant) -> GameEvent {
        GameEvent::GameOver {
            won: matches!(self.engine.phase(), GamePhase::Won),
            elapsed_secs: self.engine.state().elapsed_secs(now),
        }
    }
}
