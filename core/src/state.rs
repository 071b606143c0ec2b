use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - Idle -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Nothing opened yet, no mines on the board
    #[default]
    Idle,
    /// First cell opened, timer running
    InProgress,
    /// Every safe cell opened
    Won,
    /// A mine was opened
    Lost,
}

impl GamePhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Phase, counters and timer of a single game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    phase: GamePhase,
    mines: CellCount,
    flags_remaining: CellCount,
    opened_safe: CellCount,
    total_safe: CellCount,
    started_at: Option<Instant>,
    frozen_elapsed: Option<Duration>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            mines: config.mines,
            flags_remaining: config.mines,
            opened_safe: 0,
            total_safe: config.safe_cells(),
            started_at: None,
            frozen_elapsed: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn first_move_made(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn opened_safe(&self) -> CellCount {
        self.opened_safe
    }

    pub fn total_safe(&self) -> CellCount {
        self.total_safe
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Elapsed time at the moment the game ended, if it has.
    pub fn frozen_elapsed(&self) -> Option<Duration> {
        self.frozen_elapsed
    }

    /// Time since the first open: live while in progress, frozen once finished, zero before.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.frozen_elapsed, self.started_at) {
            (Some(elapsed), _) => elapsed,
            (None, Some(started_at)) => now.saturating_duration_since(started_at),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        self.elapsed(now).as_secs()
    }

    /// Moves from idle to in-progress and starts the timer.
    ///
    /// `placed_mines` is the number of mines actually laid, which can be lower than configured
    /// on boards too small for the safe zone.
    pub(crate) fn start(&mut self, now: Instant, total_cells: CellCount, placed_mines: CellCount) {
        if !self.phase.is_idle() {
            return;
        }
        if placed_mines != self.mines {
            log::debug!(
                "Effective mine count {} differs from configured {}",
                placed_mines,
                self.mines
            );
        }
        self.total_safe = total_cells.saturating_sub(placed_mines);
        self.started_at = Some(now);
        self.phase = GamePhase::InProgress;
        log::debug!("Game started, {} safe cells to open", self.total_safe);
    }

    pub(crate) fn record_opened(&mut self, count: CellCount) {
        self.opened_safe = self
            .opened_safe
            .saturating_add(count)
            .min(self.total_safe);
    }

    pub(crate) fn all_safe_opened(&self) -> bool {
        self.opened_safe >= self.total_safe
    }

    /// Takes one flag from the budget, returns false when none are left.
    pub(crate) fn take_flag(&mut self) -> bool {
        match self.flags_remaining.checked_sub(1) {
            Some(remaining) => {
                self.flags_remaining = remaining;
                true
            }
            None => false,
        }
    }

    pub(crate) fn return_flag(&mut self) {
        self.flags_remaining = self.flags_remaining.saturating_add(1).min(self.mines);
    }

    /// Enters a terminal phase and freezes the timer; does nothing once finished.
    pub(crate) fn finish(&mut self, won: bool, now: Instant) {
        if self.phase.is_finished() {
            return;
        }
        let elapsed = self
            .started_at
            .map_or(Duration::ZERO, |started_at| now.saturating_duration_since(started_at));
        self.frozen_elapsed = Some(elapsed);
        self.phase = if won { GamePhase::Won } else { GamePhase::Lost };
        log::debug!("Game {:?} after {:?}", self.phase, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: i64, cols: i64, mines: i64) -> GameConfig {
        GameConfig::new(rows, cols, mines).unwrap()
    }

    #[test]
    fn starts_idle_with_full_flag_budget() {
        let state = GameState::new(config(8, 8, 10));

        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.flags_remaining(), 10);
        assert_eq!(state.opened_safe(), 0);
        assert_eq!(state.total_safe(), 54);
        assert!(!state.first_move_made());
        assert_eq!(state.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn timer_runs_from_start_and_freezes_at_finish() {
        let mut state = GameState::new(config(8, 8, 10));
        let t0 = Instant::now();

        state.start(t0, 64, 10);
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.started_at(), Some(t0));
        assert_eq!(state.elapsed_secs(t0 + Duration::from_secs(3)), 3);
        assert_eq!(state.elapsed_secs(t0 + Duration::from_secs(7)), 7);

        state.finish(false, t0 + Duration::from_secs(9));
        assert_eq!(state.phase(), GamePhase::Lost);
        assert_eq!(state.frozen_elapsed(), Some(Duration::from_secs(9)));
        assert_eq!(state.elapsed_secs(t0 + Duration::from_secs(100)), 9);
    }

    #[test]
    fn terminal_phase_is_sticky() {
        let mut state = GameState::new(config(2, 2, 1));
        let t0 = Instant::now();

        state.start(t0, 4, 1);
        state.finish(true, t0 + Duration::from_secs(1));
        state.finish(false, t0 + Duration::from_secs(5));
        state.start(t0 + Duration::from_secs(6), 4, 1);

        assert_eq!(state.phase(), GamePhase::Won);
        assert_eq!(state.elapsed_secs(t0 + Duration::from_secs(10)), 1);
    }

    #[test]
    fn start_uses_effective_mine_count() {
        let mut state = GameState::new(config(3, 3, 5));

        state.start(Instant::now(), 9, 0);

        assert_eq!(state.total_safe(), 9);
    }

    #[test]
    fn opened_count_is_capped() {
        let mut state = GameState::new(config(2, 2, 1));
        state.start(Instant::now(), 4, 1);

        state.record_opened(2);
        assert!(!state.all_safe_opened());
        state.record_opened(5);
        assert_eq!(state.opened_safe(), 3);
        assert!(state.all_safe_opened());
    }

    #[test]
    fn flag_budget_never_goes_negative() {
        let mut state = GameState::new(config(3, 3, 1));

        assert!(state.take_flag());
        assert_eq!(state.flags_remaining(), 0);
        assert!(!state.take_flag());
        assert_eq!(state.flags_remaining(), 0);

        state.return_flag();
        state.return_flag();
        assert_eq!(state.flags_remaining(), 1);
    }
}
