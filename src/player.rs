//! Players, their status state machine and the factory that names them.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use log::trace;

use crate::card::Card;
use crate::error::PlayerError;
use crate::hand::Hand;

/// Highest count a player can hold without exceeding.
pub const BUST_LIMIT: u8 = 21;

/// Player status.
///
/// `Stopped` and `Exceeded` are terminal: every transition out of them
/// returns the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Player can still take cards.
    Playing,
    /// Player has stopped taking cards.
    Stopped,
    /// Player's count went over the bust limit.
    Exceeded,
}

impl PlayerStatus {
    /// Returns the status after a hit brought the hand to `count`.
    #[must_use]
    pub fn after_hit(self, count: u32, limit: u8) -> Self {
        match self {
            Self::Playing if count > u32::from(limit) => Self::Exceeded,
            other => other,
        }
    }

    /// Returns the status after the player stops.
    #[must_use]
    pub const fn after_stop(self) -> Self {
        match self {
            Self::Playing | Self::Stopped => Self::Stopped,
            Self::Exceeded => Self::Exceeded,
        }
    }

    /// Returns whether the player can still take cards.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// A player taking part in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    status: PlayerStatus,
    hand: Hand,
    bust_limit: u8,
}

impl Player {
    /// Creates a player with the standard bust limit of 21.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_bust_limit(name, BUST_LIMIT)
    }

    /// Creates a player that exceeds once its count goes over `bust_limit`.
    #[must_use]
    pub fn with_bust_limit(name: impl Into<String>, bust_limit: u8) -> Self {
        Self {
            name: name.into(),
            status: PlayerStatus::Playing,
            hand: Hand::new(),
            bust_limit,
        }
    }

    /// Adds a card to the player's hand.
    ///
    /// The player becomes [`PlayerStatus::Exceeded`] as soon as the count
    /// goes over the bust limit.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidOperation`] if the player is stopped or
    /// has exceeded.
    pub fn hit(&mut self, card: Card) -> Result<(), PlayerError> {
        if !self.status.is_playing() {
            return Err(PlayerError::InvalidOperation);
        }

        self.hand.push(card);
        self.status = self.status.after_hit(self.count(), self.bust_limit);

        if self.status == PlayerStatus::Exceeded {
            trace!("{self} exceeded with {} on {} cards", self.count(), self.hand.len());
        }

        Ok(())
    }

    /// Stops the player. An exceeded player stays exceeded.
    pub fn stop(&mut self) {
        self.status = self.status.after_stop();
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns whether the player can still take cards.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    /// Returns the cards received so far, in order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Sums the values of the cards in hand.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.hand.count()
    }

    /// Returns the score used for ranking: the count, or 0 once exceeded.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self.status {
            PlayerStatus::Exceeded => 0,
            PlayerStatus::Playing | PlayerStatus::Stopped => self.count(),
        }
    }

    /// Returns the count above which the player exceeds.
    #[must_use]
    pub const fn bust_limit(&self) -> u8 {
        self.bust_limit
    }

    /// Renders the player, one card per line, followed by the count.
    ///
    /// ```
    /// use hands21::{Card, Player};
    ///
    /// let mut player = Player::new("Luck");
    /// player.hit(Card::parse("10", "♣").unwrap()).unwrap();
    /// player.hit(Card::parse("9", "♢").unwrap()).unwrap();
    ///
    /// assert_eq!(
    ///     player.description(),
    ///     "Player Luck\n    hand : \n        10 of ♣\n        9 of ♢\n    count: 19"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        let mut out = self.to_string();
        out.push_str("\n    hand : ");
        for card in self.hand() {
            out.push_str(&format!("\n        {card}"));
        }
        out.push_str(&format!("\n    count: {}", self.count()));
        out
    }

    /// Switches to a new bust limit, exceeding a player already over it.
    pub(crate) fn apply_bust_limit(&mut self, limit: u8) {
        self.bust_limit = limit;
        self.status = self.status.after_hit(self.count(), limit);
    }

    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.status = PlayerStatus::Playing;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.name)
    }
}

/// Builds players, numbering unnamed ones `1`, `2`, ... in creation order.
///
/// Every created player advances the counter, named or not. The counter
/// belongs to the factory, so two games never share numbering.
#[derive(Debug, Clone)]
pub struct PlayerFactory {
    created: usize,
    bust_limit: u8,
}

impl PlayerFactory {
    /// Creates a factory for players with the given bust limit.
    #[must_use]
    pub const fn new(bust_limit: u8) -> Self {
        Self {
            created: 0,
            bust_limit,
        }
    }

    /// Creates a player named after its sequence number.
    pub fn create(&mut self) -> Player {
        self.created += 1;
        Player::with_bust_limit(self.created.to_string(), self.bust_limit)
    }

    /// Creates a player with an explicit name.
    pub fn named(&mut self, name: impl Into<String>) -> Player {
        self.created += 1;
        Player::with_bust_limit(name, self.bust_limit)
    }

    /// Returns how many players this factory has created.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }
}

impl Default for PlayerFactory {
    fn default() -> Self {
        Self::new(BUST_LIMIT)
    }
}
