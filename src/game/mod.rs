//! Game engine and turn management.

use core::cmp::Reverse;

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::{GameOptions, MIN_PLAYERS};
use crate::player::{Player, PlayerFactory};
use crate::result::Standing;

mod actions;
pub mod state;

pub use state::GameStatus;

/// A round of blackjack between a fixed, ordered group of players.
///
/// The game owns the deck and the players. Players act in seating order,
/// wrapping around and skipping anyone who has stopped or exceeded, until
/// nobody is left playing.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to toss.
    deck: Deck,
    /// Players in seating order.
    players: Vec<Player>,
    /// Index of the player whose turn it is; `None` once the round is over.
    current_turn: Option<usize>,
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game for the given players, seated in order.
    ///
    /// Every player is switched to [`GameOptions::bust_limit`]; a player
    /// whose count is already over it is exceeded. The first player still
    /// playing takes the first turn. `seed` drives every shuffle of the
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEnoughPlayers`] if there are fewer players
    /// than [`GameOptions::min_players`], or fewer than [`MIN_PLAYERS`].
    pub fn new(
        mut players: Vec<Player>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, GameError> {
        if players.len() < options.min_players.max(MIN_PLAYERS) {
            return Err(GameError::NotEnoughPlayers);
        }

        for player in &mut players {
            player.apply_bust_limit(options.bust_limit);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&options, &mut rng);
        let current_turn = players.iter().position(Player::is_playing);

        debug!("new game with {} players", players.len());

        Ok(Self {
            deck,
            players,
            current_turn,
            options,
            rng,
        })
    }

    /// Creates a game with `count` players named `1`, `2`, ...
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEnoughPlayers`] if `count` is below
    /// [`GameOptions::min_players`].
    ///
    /// # Example
    ///
    /// ```
    /// use hands21::{Game, GameOptions, GameStatus};
    ///
    /// let mut game = Game::with_player_count(3, GameOptions::default(), 7).unwrap();
    /// game.shuffle_cards();
    /// game.deal().unwrap();
    ///
    /// assert_eq!(game.status(), GameStatus::Running);
    /// assert!(game.players().iter().all(|p| p.hand().len() == 2));
    /// ```
    pub fn with_player_count(
        count: usize,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut factory = PlayerFactory::new(options.bust_limit);
        let players = (0..count).map(|_| factory.create()).collect();
        Self::new(players, options, seed)
    }

    /// Creates a game with one player per name, seated in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEnoughPlayers`] if there are fewer names than
    /// [`GameOptions::min_players`].
    pub fn with_player_names<I, S>(
        names: I,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut factory = PlayerFactory::new(options.bust_limit);
        let players = names.into_iter().map(|name| factory.named(name)).collect();
        Self::new(players, options, seed)
    }

    /// Creates a full deck, shuffled if the options ask for it.
    fn create_deck(options: &GameOptions, rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::new();
        if options.shuffle_on_start {
            deck.shuffle(rng);
        }
        deck
    }

    /// Shuffles the cards left in the deck. Dealt cards are unaffected.
    pub fn shuffle_cards(&mut self) {
        self.deck.shuffle(&mut self.rng);
        debug!("shuffled {} cards", self.deck.len());
    }

    /// Starts the round over with a fresh deck and empty hands.
    ///
    /// Every player is back to playing and the first player has the turn.
    /// The random number generator keeps its state, so a shuffled restart
    /// differs from the previous round.
    pub fn reset(&mut self) {
        self.deck = Self::create_deck(&self.options, &mut self.rng);
        for player in &mut self.players {
            player.reset();
        }
        self.current_turn = if self.players.is_empty() { None } else { Some(0) };

        debug!("game reset");
    }

    /// Returns the round status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.players.iter().any(Player::is_playing) {
            GameStatus::Running
        } else {
            GameStatus::Over
        }
    }

    /// Returns the seat index of the player whose turn it is.
    ///
    /// Returns `None` once the round is over.
    #[must_use]
    pub fn current_turn_index(&self) -> Option<usize> {
        self.current_turn.and_then(|index| self.scan_from(index))
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` once the round is over.
    #[must_use]
    pub fn current_turn_player(&self) -> Option<&Player> {
        self.current_turn_index().map(|index| &self.players[index])
    }

    /// Returns the players sorted by descending score.
    ///
    /// Exceeded players score 0. Equal scores keep their seating order.
    #[must_use]
    pub fn rank(&self) -> Vec<&Player> {
        self.ranked_seats()
            .into_iter()
            .map(|index| &self.players[index])
            .collect()
    }

    /// Returns an owned snapshot of [`Game::rank`].
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.ranked_seats()
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let player = &self.players[index];
                Standing {
                    place: position + 1,
                    player_index: index,
                    name: player.name().into(),
                    score: player.score(),
                    count: player.count(),
                    status: player.status(),
                }
            })
            .collect()
    }

    /// Seat indexes ordered by descending score, ties in seating order.
    fn ranked_seats(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = (0..self.players.len()).collect();
        seats.sort_by_key(|&index| Reverse(self.players[index].score()));
        seats
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a mutable reference to the player at `index`.
    ///
    /// Stopping or busting the current player from outside is fine: the
    /// turn moves on to the next playing player.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns a mutable reference to the deck.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
