use log::{debug, trace};

use crate::error::GameError;

use super::Game;

impl Game {
    /// Tosses the top card to the current player and passes the turn.
    ///
    /// Returns `Ok(false)` without touching anything if the round is over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Deck`] if the deck is empty. The turn does not
    /// move in that case.
    pub fn toss_card(&mut self) -> Result<bool, GameError> {
        let Some(index) = self.sync_turn() else {
            return Ok(false);
        };

        let card = self.deck.pop()?;
        let player = &mut self.players[index];
        player.hit(card)?;
        trace!("tossed {card} to {player}, count {}", player.count());

        self.advance_from(index);
        Ok(true)
    }

    /// Tosses two cards to every player, one at a time in seating order.
    ///
    /// Stops early if the round ends mid-deal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Deck`] if the deck runs out.
    pub fn deal(&mut self) -> Result<(), GameError> {
        let tosses = 2 * self.players.len();
        for _ in 0..tosses {
            if !self.toss_card()? {
                break;
            }
        }

        debug!("dealt, {} cards left", self.deck.len());
        Ok(())
    }

    /// Stops the current player and passes the turn.
    ///
    /// Returns `false` without touching anything if the round is over.
    pub fn stop(&mut self) -> bool {
        let Some(index) = self.sync_turn() else {
            return false;
        };

        let player = &mut self.players[index];
        player.stop();
        trace!("{player} stopped at {}", player.count());

        self.advance_from(index);
        true
    }

    /// Points the turn at a playing player, in case the current one was
    /// finished through [`Game::player_mut`].
    fn sync_turn(&mut self) -> Option<usize> {
        self.current_turn = self.current_turn_index();
        self.current_turn
    }

    /// Passes the turn to the next playing player after `acting`.
    ///
    /// The acting player is the last one checked, so it keeps the turn when
    /// everyone else is done.
    fn advance_from(&mut self, acting: usize) {
        self.current_turn = self.scan_from(acting + 1);

        match self.current_turn {
            Some(next) => trace!("turn passes to {}", self.players[next]),
            None => debug!("round over"),
        }
    }

    /// Finds the first playing player at or after seat `start`, wrapping
    /// around once.
    pub(super) fn scan_from(&self, start: usize) -> Option<usize> {
        let seats = self.players.len();
        (0..seats)
            .map(|step| (start + step) % seats)
            .find(|&index| self.players[index].is_playing())
    }
}
