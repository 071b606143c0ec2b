use sapper_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("No session started yet")]
    NoSession,
}

pub type Result<T> = core::result::Result<T, ProtocolError>;
