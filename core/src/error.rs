use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "Invalid configuration: {rows}x{cols} with {mines} mines, need a non-empty board with at least one safe cell"
    )]
    InvalidConfiguration { rows: i64, cols: i64, mines: i64 },
    #[error("Board {rows}x{cols} too large, at most {} rows and columns are supported", Coord::MAX)]
    BoardTooLarge { rows: i64, cols: i64 },
    #[error("Invalid preset {0:?}, expected ROWSxCOLSxMINES or a preset name")]
    InvalidPreset(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
