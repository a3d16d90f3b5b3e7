//! Final ranking types.

extern crate alloc;

use alloc::string::String;

use crate::player::PlayerStatus;

/// A player's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// 1-based place; equal scores still get distinct places.
    pub place: usize,
    /// Index of the player in the game's seating order.
    pub player_index: usize,
    /// The player's name.
    pub name: String,
    /// Ranking score (0 if the player exceeded).
    pub score: u32,
    /// Raw hand count.
    pub count: u32,
    /// The player's status when the snapshot was taken.
    pub status: PlayerStatus,
}
