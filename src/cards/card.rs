//! Card identity and the fixed point valuation.
//!
//! The valuation is a rule of this one game, not configuration:
//! K/Q/J are worth 10, the ace is worth 1, numeric cards their face value.

use serde::{Deserialize, Serialize};

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, ace low.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value under the race-to-21 rules.
    #[must_use]
    pub fn point_value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Short display token ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

/// A single playing card. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Point value contributed to a hand's score.
    #[must_use]
    pub fn point_value(self) -> u32 {
        self.rank.point_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_cards_worth_ten() {
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.point_value(), 10);
        }
    }

    #[test]
    fn test_ace_worth_one() {
        assert_eq!(Rank::Ace.point_value(), 1);
    }

    #[test]
    fn test_numeric_cards_face_value() {
        let expected = [
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
        for (rank, value) in expected {
            assert_eq!(rank.point_value(), value);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::King, Suit::Spades).to_string(), "K♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "A♣");
    }

    #[test]
    fn test_card_serde_round_trip() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
