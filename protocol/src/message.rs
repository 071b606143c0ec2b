use sapper_core::{CellCount, CellView, Coord, Coord2, GameEvent, OpenedCell, Summary};
use serde::{Deserialize, Serialize};

/// Commands and queries sent by the presentation layer.
///
/// Numbers are signed so that any integer decodes; range checks happen when the command runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewSession { rows: i64, cols: i64, mines: i64 },
    /// A preset name or `ROWSxCOLSxMINES`
    NewPreset { preset: String },
    Restart,
    Open { row: i64, col: i64 },
    ToggleFlag { row: i64, col: i64 },
    GetCell { row: i64, col: i64 },
    GetSummary,
}

/// Events and query answers sent back to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    SessionStarted {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    Opened {
        cells: Vec<OpenedCell>,
    },
    FlagChanged {
        row: Coord,
        col: Coord,
        flagged: bool,
        flags_remaining: CellCount,
    },
    Exploded {
        row: Coord,
        col: Coord,
        mines: Vec<Coord2>,
    },
    GameOver {
        won: bool,
        elapsed_secs: u64,
    },
    Cell {
        row: Coord,
        col: Coord,
        view: CellView,
    },
    Summary(Summary),
    Error {
        message: String,
    },
}

impl From<GameEvent> for ServerMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Opened { cells } => Self::Opened { cells },
            GameEvent::FlagChanged {
                row,
                col,
                flagged,
                flags_remaining,
            } => Self::FlagChanged {
                row,
                col,
                flagged,
                flags_remaining,
            },
            GameEvent::Exploded { row, col, mines } => Self::Exploded { row, col, mines },
            GameEvent::GameOver { won, elapsed_secs } => Self::GameOver { won, elapsed_secs },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_messages_use_snake_case_tags() {
        let open: ClientMessage =
            serde_json::from_value(json!({"type": "open", "row": 2, "col": 3})).unwrap();
        assert_eq!(open, ClientMessage::Open { row: 2, col: 3 });

        let summary: ClientMessage = serde_json::from_str(r#"{"type":"get_summary"}"#).unwrap();
        assert_eq!(summary, ClientMessage::GetSummary);

        let preset: ClientMessage =
            serde_json::from_value(json!({"type": "new_preset", "preset": "8x8x10"})).unwrap();
        assert_eq!(
            preset,
            ClientMessage::NewPreset {
                preset: "8x8x10".into()
            }
        );
    }

    #[test]
    fn server_messages_serialize_flat() {
        let cell = ServerMessage::Cell {
            row: 1,
            col: 0,
            view: CellView::Open(3),
        };
        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({"type": "cell", "row": 1, "col": 0, "view": {"state": "open", "adjacent": 3}})
        );

        let flag = ServerMessage::from(GameEvent::FlagChanged {
            row: 4,
            col: 5,
            flagged: true,
            flags_remaining: 9,
        });
        assert_eq!(
            serde_json::to_value(&flag).unwrap(),
            json!({"type": "flag_changed", "row": 4, "col": 5, "flagged": true, "flags_remaining": 9})
        );
    }

    #[test]
    fn summary_is_inlined() {
        let summary = ServerMessage::Summary(Summary {
            phase: sapper_core::GamePhase::InProgress,
            flags_remaining: 10,
            opened_safe: 12,
            total_safe: 54,
            elapsed_secs: 7,
        });

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "type": "summary",
                "phase": "in_progress",
                "flags_remaining": 10,
                "opened_safe": 12,
                "total_safe": 54,
                "elapsed_secs": 7
            })
        );
    }
}
