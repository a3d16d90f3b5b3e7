//! A turn-based multi-player blackjack round engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that owns a 52-card [`Deck`] and an
//! ordered group of [`Player`]s. Cards are tossed to players in turn until
//! every player has stopped or gone over 21, then [`Game::rank`] orders
//! them by score.
//!
//! # Example
//!
//! ```
//! use hands21::{Game, GameOptions};
//!
//! let mut game = Game::with_player_names(["Jane", "Mary"], GameOptions::default(), 42).unwrap();
//! game.shuffle_cards();
//! game.deal().unwrap();
//!
//! while game.status().is_running() {
//!     let count = game.current_turn_player().map_or(0, |p| p.count());
//!     if count < 17 {
//!         game.toss_card().unwrap();
//!     } else {
//!         game.stop();
//!     }
//! }
//!
//! let winner = game.rank()[0];
//! println!("{winner} wins with {}", winner.score());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, GameError, PlayerError};
pub use game::{Game, GameStatus};
pub use hand::Hand;
pub use options::{GameOptions, MIN_PLAYERS};
pub use player::{BUST_LIMIT, Player, PlayerFactory, PlayerStatus};
pub use result::Standing;
