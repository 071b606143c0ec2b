use sapper_core::{Coord, Coord2, GameConfig, Session};

use crate::*;

/// Drives a single session from decoded client messages.
#[derive(Debug, Default)]
pub struct Host {
    session: Option<Session>,
    seed: Option<u64>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions created by this host lay mines from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            session: None,
            seed: Some(seed),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Decodes one JSON message and answers with a JSON array of server messages.
    ///
    /// Only undecodable input is an error; game-level failures are answered with an `error`
    /// message so the caller can keep the connection going.
    pub fn handle_json(&mut self, text: &str) -> Result<String> {
        let message: ClientMessage = serde_json::from_str(text)?;
        let replies = self.handle(message).unwrap_or_else(|err| {
            log::debug!("Rejected message: {}", err);
            vec![ServerMessage::Error {
                message: err.to_string(),
            }]
        });
        Ok(serde_json::to_string(&replies)?)
    }

    pub fn handle(&mut self, message: ClientMessage) -> Result<Vec<ServerMessage>> {
        use ClientMessage::*;

        match message {
            NewSession { rows, cols, mines } => {
                let config = GameConfig::new(rows, cols, mines)?;
                Ok(vec![self.start(config)])
            }
            NewPreset { preset } => {
                let config = preset.parse::<GameConfig>()?;
                Ok(vec![self.start(config)])
            }
            Restart => {
                let session = self.session_mut()?;
                session.restart();
                Ok(vec![started(session.config())])
            }
            Open { row, col } => {
                let session = self.session_mut()?;
                Ok(coords(row, col)
                    .map(|coords| session.open(coords))
                    .unwrap_or_default()
                    .into_iter()
                    .map(ServerMessage::from)
                    .collect())
            }
            ToggleFlag { row, col } => {
                let session = self.session_mut()?;
                Ok(coords(row, col)
                    .map(|coords| session.toggle_flag(coords))
                    .unwrap_or_default()
                    .into_iter()
                    .map(ServerMessage::from)
                    .collect())
            }
            GetCell { row, col } => {
                let session = self.session_mut()?;
                let cell = coords(row, col).and_then(|coords| {
                    let view = session.cell_view(coords)?;
                    Some(ServerMessage::Cell {
                        row: coords.0,
                        col: coords.1,
                        view,
                    })
                });
                Ok(cell.into_iter().collect())
            }
            GetSummary => Ok(vec![ServerMessage::Summary(self.session_mut()?.summary())]),
        }
    }

    fn start(&mut self, config: GameConfig) -> ServerMessage {
        if let Some(session) = self.session.as_mut() {
            session.restart_with(config);
        } else {
            self.session = Some(match self.seed {
                Some(seed) => Session::with_seed(config, seed),
                None => Session::with_entropy(config),
            });
        }
        started(config)
    }

    fn session_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(ProtocolError::NoSession)
    }
}

fn started(config: GameConfig) -> ServerMessage {
    ServerMessage::SessionStarted {
        rows: config.rows(),
        cols: config.cols(),
        mines: config.mines,
    }
}

/// Negative wire coordinates, or ones beyond the coordinate range, cannot be on the board.
fn coords(row: i64, col: i64) -> Option<Coord2> {
    Some((Coord::try_from(row).ok()?, Coord::try_from(col).ok()?))
}
