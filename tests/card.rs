//! Card and valuation tests.

use hands21::{Card, CardError, Rank, Suit};

#[test]
fn card_fields_and_equality() {
    let two_of_clubs = Card::new(Rank::Two, Suit::Clubs);
    assert_eq!((two_of_clubs.rank, two_of_clubs.suit), (Rank::Two, Suit::Clubs));
    assert_eq!(Card::parse("2", "♣").unwrap(), two_of_clubs);
    assert_ne!(Card::new(Rank::Two, Suit::Spades), two_of_clubs);
}

#[test]
fn number_cards_are_worth_their_rank() {
    let numbers = [
        (Rank::Two, 2),
        (Rank::Three, 3),
        (Rank::Four, 4),
        (Rank::Five, 5),
        (Rank::Six, 6),
        (Rank::Seven, 7),
        (Rank::Eight, 8),
        (Rank::Nine, 9),
        (Rank::Ten, 10),
    ];

    for suit in Suit::ALL {
        for (rank, expected) in numbers {
            assert_eq!(Card::new(rank, suit).value(), expected, "{rank} of {suit}");
        }
    }
}

#[test]
fn face_cards_are_worth_ten_and_ace_one() {
    for suit in Suit::ALL {
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(Card::new(rank, suit).value(), 10);
        }
        assert_eq!(Card::new(Rank::Ace, suit).value(), 1);
    }
}

#[test]
fn parse_accepts_every_printed_card() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::new(rank, suit);
            assert_eq!(Card::parse(rank.label(), suit.symbol()), Ok(card));
        }
    }
}

#[test]
fn parse_rejects_malformed_cards() {
    assert_eq!(Card::parse("1", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::parse("11", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::parse("j", "♣"), Err(CardError::InvalidRank));
    assert_eq!(Card::parse("J", "C"), Err(CardError::InvalidSuit));
    assert_eq!(Card::parse("", ""), Err(CardError::InvalidRank));
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10 of ♣");
    assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "A of ♡");
    assert_eq!(Card::new(Rank::King, Suit::Diamonds).to_string(), "K of ♢");
}
