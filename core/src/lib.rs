use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use state::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod session;
mod state;
mod types;

/// Board dimensions and requested mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Requires at least one row and column, and at least one safe cell.
    ///
    /// Each axis is capped at [`Coord::MAX`].
    pub fn new(rows: i64, cols: i64, mines: i64) -> Result<Self> {
        let invalid = || GameError::InvalidConfiguration { rows, cols, mines };

        if rows < 1 || cols < 1 || mines < 0 || mines >= rows.saturating_mul(cols) {
            return Err(invalid());
        }
        let too_large = || GameError::BoardTooLarge { rows, cols };
        let row_count = Coord::try_from(rows).map_err(|_| too_large())?;
        let col_count = Coord::try_from(cols).map_err(|_| too_large())?;
        // below rows*cols, which fits once both axes do
        let mine_count = CellCount::try_from(mines).map_err(|_| invalid())?;

        Ok(Self::new_unchecked((row_count, col_count), mine_count))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::Beginner.config()
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.size.0, self.size.1, self.mines)
    }
}

/// Parses `ROWSxCOLSxMINES` (e.g. `8x8x10`) or a preset name.
impl FromStr for GameConfig {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(preset) = s.parse::<Preset>() {
            return Ok(preset.config());
        }

        let invalid = || GameError::InvalidPreset(s.to_owned());
        let mut parts = s.trim().split(['x', 'X']).map(|part| part.trim().parse::<i64>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(rows)), Some(Ok(cols)), Some(Ok(mines)), None) => {
                GameConfig::new(rows, cols, mines)
            }
            _ => Err(invalid()),
        }
    }
}

/// The three board sizes offered to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked((8, 8), 10),
            Self::Intermediate => GameConfig::new_unchecked((12, 12), 22),
            Self::Expert => GameConfig::new_unchecked((16, 16), 40),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::InvalidPreset(s.to_owned()))
    }
}

/// A cell opened by a single action, with its adjacent mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenedCell {
    pub row: Coord,
    pub col: Coord,
    pub adjacent: u8,
}

impl OpenedCell {
    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed {
        flagged: bool,
        flags_remaining: CellCount,
    },
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(&self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed { .. } => true,
        }
    }
}

/// Outcome of opening a cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Safe cells opened, game goes on
    Opened(Vec<OpenedCell>),
    /// A mine was opened; `mines` lists every mine on the board including `at`
    Exploded { at: Coord2, mines: Vec<Coord2> },
    /// The last safe cells were opened
    Won(Vec<OpenedCell>),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Opened(_) => true,
            Exploded { .. } => true,
            Won(_) => true,
        }
    }

    pub fn opened_cells(&self) -> &[OpenedCell] {
        match self {
            Self::Opened(cells) | Self::Won(cells) => cells,
            Self::NoChange | Self::Exploded { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_or_full_boards() {
        assert!(GameConfig::new(0, 8, 0).is_err());
        assert!(GameConfig::new(8, 0, 0).is_err());
        assert!(GameConfig::new(8, 8, 64).is_err());
        assert!(GameConfig::new(8, 8, -1).is_err());
        assert_eq!(
            GameConfig::new(-3, 8, 1),
            Err(GameError::InvalidConfiguration {
                rows: -3,
                cols: 8,
                mines: 1
            })
        );
        assert_eq!(
            GameConfig::new(2, 2, 9),
            Err(GameError::InvalidConfiguration {
                rows: 2,
                cols: 2,
                mines: 9
            })
        );
    }

    #[test]
    fn oversized_axis_names_the_limit() {
        let err = GameConfig::new(300, 1, 0).unwrap_err();

        assert_eq!(err, GameError::BoardTooLarge { rows: 300, cols: 1 });
        assert!(err.to_string().contains("at most 255"), "{err}");
        assert!(GameConfig::new(256, 2, 1).is_err());
        assert!(GameConfig::new(255, 255, 0).is_ok());
        assert_eq!(
            "300x1x0".parse::<GameConfig>(),
            Err(GameError::BoardTooLarge { rows: 300, cols: 1 })
        );
    }

    #[test]
    fn config_accepts_edge_values() {
        let single = GameConfig::new(1, 1, 0).unwrap();
        assert_eq!(single.total_cells(), 1);
        assert_eq!(single.safe_cells(), 1);

        let dense = GameConfig::new(8, 8, 63).unwrap();
        assert_eq!(dense.safe_cells(), 1);
    }

    #[test]
    fn presets_match_board_sizes() {
        assert_eq!(Preset::Beginner.config(), GameConfig::new(8, 8, 10).unwrap());
        assert_eq!(Preset::Intermediate.config(), GameConfig::new(12, 12, 22).unwrap());
        assert_eq!(Preset::Expert.config(), GameConfig::new(16, 16, 40).unwrap());
        assert_eq!(GameConfig::default(), Preset::Beginner.config());
    }

    #[test]
    fn parses_dimension_strings_and_names() {
        assert_eq!("8x8x10".parse::<GameConfig>(), Ok(Preset::Beginner.config()));
        assert_eq!(" 16X16X40 ".parse::<GameConfig>(), Ok(Preset::Expert.config()));
        assert_eq!("Intermediate".parse::<GameConfig>(), Ok(Preset::Intermediate.config()));
        assert_eq!(
            "9x9".parse::<GameConfig>(),
            Err(GameError::InvalidPreset("9x9".into()))
        );
        assert!("8x8x64".parse::<GameConfig>().is_err());
        assert!("huge".parse::<Preset>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let config = GameConfig::new(5, 7, 3).unwrap();

        assert_eq!(config.to_string(), "5x7x3");
        assert_eq!(config.to_string().parse::<GameConfig>(), Ok(config));
    }
}
