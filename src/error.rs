//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when building a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("unrecognized card rank")]
    InvalidRank,
    /// Suit is not one of `♣ ♢ ♡ ♠`.
    #[error("unrecognized card suit")]
    InvalidSuit,
}

/// Errors that can occur on deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// Index is past the end of the deck.
    #[error("index out of bounds")]
    IndexOutOfBounds,
    /// The card is already in the deck.
    #[error("card is already in the deck")]
    DuplicateCard,
}

/// Errors that can occur on player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The player is stopped or exceeded and cannot take cards.
    #[error("player can't hit because it is no longer playing")]
    InvalidOperation,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer players than the configured minimum.
    #[error("not enough players")]
    NotEnoughPlayers,
    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A player action failed.
    #[error(transparent)]
    Player(#[from] PlayerError),
}
