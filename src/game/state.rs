//! Game state types.

/// Round status, derived from the players' statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// At least one player is still playing.
    Running,
    /// Every player has stopped or exceeded.
    Over,
}

impl GameStatus {
    /// Returns whether the round is still running.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}
