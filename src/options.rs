//! Game configuration options.

use crate::player::BUST_LIMIT;

/// Fewest players a round can be played with.
pub const MIN_PLAYERS: usize = 2;

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hands21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_bust_limit(21)
///     .with_shuffle_on_start(true)
///     .with_min_players(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Count above which a player exceeds.
    pub bust_limit: u8,
    /// Whether the fresh deck is shuffled when a round starts.
    ///
    /// Off by default, so a new game holds the deck in rank-major order
    /// until [`Game::shuffle_cards`](crate::Game::shuffle_cards) is called.
    pub shuffle_on_start: bool,
    /// Minimum number of players in a round, never below [`MIN_PLAYERS`].
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bust_limit: BUST_LIMIT,
            shuffle_on_start: false,
            min_players: MIN_PLAYERS,
        }
    }
}

impl GameOptions {
    /// Sets the bust limit.
    ///
    /// # Example
    ///
    /// ```
    /// use hands21::GameOptions;
    ///
    /// let options = GameOptions::default().with_bust_limit(31);
    /// assert_eq!(options.bust_limit, 31);
    /// ```
    #[must_use]
    pub const fn with_bust_limit(mut self, limit: u8) -> Self {
        self.bust_limit = limit;
        self
    }

    /// Sets whether the deck is shuffled when a round starts.
    ///
    /// # Example
    ///
    /// ```
    /// use hands21::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_on_start(true);
    /// assert!(options.shuffle_on_start);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_start(mut self, shuffle: bool) -> Self {
        self.shuffle_on_start = shuffle;
        self
    }

    /// Sets the minimum number of players.
    ///
    /// Values below [`MIN_PLAYERS`] are raised to it.
    ///
    /// # Example
    ///
    /// ```
    /// use hands21::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(4);
    /// assert_eq!(options.min_players, 4);
    ///
    /// let options = GameOptions::default().with_min_players(0);
    /// assert_eq!(options.min_players, 2);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = if min < MIN_PLAYERS { MIN_PLAYERS } else { min };
        self
    }
}
