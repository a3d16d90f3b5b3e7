//! Player tests.

use hands21::{Card, Hand, Player, PlayerError, PlayerFactory, PlayerStatus, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hit_all(player: &mut Player, cards: &[Card]) {
    for &c in cards {
        player.hit(c).unwrap();
    }
}

/// A player holding 10, 9 and 2: exactly 21.
fn lucky_player() -> Player {
    let mut player = Player::new("Luck");
    hit_all(
        &mut player,
        &[
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Two, Suit::Hearts),
        ],
    );
    player
}

#[test]
fn new_player_starts_empty_and_playing() {
    let player = Player::new("Jane");
    assert!(player.hand().is_empty());
    assert_eq!(player.count(), 0);
    assert_eq!(player.status(), PlayerStatus::Playing);
}

#[test]
fn hit_appends_to_hand_and_count() {
    let cards = [
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
    ];
    let mut player = Player::new("Jane");

    for (i, expected) in [1, 3, 6].into_iter().enumerate() {
        player.hit(cards[i]).unwrap();
        assert_eq!(player.hand(), &cards[..=i]);
        assert_eq!(player.count(), expected);
        assert_eq!(player.status(), PlayerStatus::Playing);
    }
}

#[test]
fn twenty_one_is_still_playing() {
    let player = lucky_player();
    assert_eq!(player.count(), 21);
    assert_eq!(player.status(), PlayerStatus::Playing);
}

#[test]
fn going_over_21_exceeds() {
    let mut player = lucky_player();
    player.hit(card(Rank::Ten, Suit::Spades)).unwrap();
    assert_eq!(player.count(), 31);
    assert_eq!(player.status(), PlayerStatus::Exceeded);
    assert_eq!(player.score(), 0);
}

#[test]
fn stopped_player_cannot_hit() {
    let mut player = lucky_player();
    player.stop();
    assert_eq!(player.status(), PlayerStatus::Stopped);
    assert_eq!(
        player.hit(card(Rank::Ace, Suit::Clubs)),
        Err(PlayerError::InvalidOperation)
    );
    assert_eq!(player.hand().len(), 3);
    assert_eq!(player.score(), 21);
}

#[test]
fn exceeded_player_cannot_hit_or_stop() {
    let mut player = lucky_player();
    player.hit(card(Rank::Ace, Suit::Clubs)).unwrap();
    assert_eq!(player.status(), PlayerStatus::Exceeded);

    assert_eq!(
        player.hit(card(Rank::Ace, Suit::Spades)),
        Err(PlayerError::InvalidOperation)
    );
    assert_eq!(player.hand().len(), 4);

    player.stop();
    assert_eq!(player.status(), PlayerStatus::Exceeded);
}

#[test]
fn status_transitions_are_one_way() {
    use PlayerStatus::{Exceeded, Playing, Stopped};

    assert_eq!(Playing.after_hit(21, 21), Playing);
    assert_eq!(Playing.after_hit(22, 21), Exceeded);
    assert_eq!(Playing.after_stop(), Stopped);

    for terminal in [Stopped, Exceeded] {
        assert_eq!(terminal.after_hit(0, 21), terminal);
        assert_eq!(terminal.after_hit(30, 21), terminal);
        assert_eq!(terminal.after_stop(), terminal);
        assert!(!terminal.is_playing());
    }
}

#[test]
fn custom_bust_limit() {
    let mut player = Player::with_bust_limit("High", 25);
    hit_all(
        &mut player,
        &[
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
        ],
    );
    assert_eq!(player.status(), PlayerStatus::Playing);

    player.hit(card(Rank::Ace, Suit::Clubs)).unwrap();
    assert_eq!(player.status(), PlayerStatus::Exceeded);
}

#[test]
fn player_display_and_description() {
    let player = lucky_player();
    assert_eq!(player.to_string(), "Player Luck");
    assert_eq!(
        player.description(),
        "Player Luck\n    hand : \n        10 of ♣\n        9 of ♢\n        2 of ♡\n    count: 21"
    );
}

#[test]
fn factory_numbers_unnamed_players() {
    let mut factory = PlayerFactory::default();
    let names: Vec<String> = (0..9).map(|_| factory.create().to_string()).collect();
    let expected: Vec<String> = (1..=9).map(|i| format!("Player {i}")).collect();
    assert_eq!(names, expected);
    assert_eq!(factory.created(), 9);
}

#[test]
fn factory_uses_explicit_names_verbatim() {
    let mut factory = PlayerFactory::default();
    let jane = factory.named("Jane");
    assert_eq!(jane.name(), "Jane");
    assert_eq!(jane.to_string(), "Player Jane");

    // Named players still take a number.
    assert_eq!(factory.create().name(), "2");
}

#[test]
fn factories_do_not_share_numbering() {
    let mut first = PlayerFactory::default();
    let mut second = PlayerFactory::default();
    assert_eq!(first.create().name(), "1");
    assert_eq!(first.create().name(), "2");
    assert_eq!(second.create().name(), "1");
}

#[test]
fn hand_tracks_cards_and_count() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.count(), 0);

    hand.push(card(Rank::King, Suit::Spades));
    hand.push(card(Rank::Ace, Suit::Hearts));
    assert_eq!(hand.len(), 2);
    assert!(!hand.is_empty());
    assert_eq!(hand.count(), 11);
    assert_eq!(
        hand.cards(),
        &[card(Rank::King, Suit::Spades), card(Rank::Ace, Suit::Hearts)]
    );

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.count(), 0);
}
