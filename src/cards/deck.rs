//! The card supply: an ordered sequence of not-yet-dealt cards.
//!
//! Invariants:
//! - After [`Deck::shuffle`], all 52 standard cards are present exactly once.
//! - [`Deck::deal_top`] removes exactly one card from the top, and that card
//!   is never reissued until the next shuffle.
//! - Exhaustion is observable: dealing from an empty supply fails with
//!   [`GameError::SupplyExhausted`] rather than blocking or panicking.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::{GameError, GameRng};

/// Ordered card supply. The top of the supply is the *end* of the vec, so
/// dealing is a pop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 52-card standard deck in suit-major order.
    #[must_use]
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A supply with an explicit card order, for rigged tests and
    /// diagnostics. The last card in `cards` is the top of the supply.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Replenish to the full standard deck and randomize the order.
    ///
    /// Any cards still in the supply are discarded; previously dealt cards
    /// return. This is the "reshuffle between rounds" semantic.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards = Self::standard_52().cards;
        rng.shuffle(&mut self.cards);
    }

    /// Deal one card from the top of the supply.
    pub fn deal_top(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::SupplyExhausted)
    }

    /// Number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that the next deal would yield, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
