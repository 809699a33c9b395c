//! Players and their per-round state.
//!
//! A `Player` is created once per session, when they join; their name
//! persists across rounds while hand, score, and status are reset at the
//! start of every new round via [`Player::reset_for_round`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Where a player stands within the current round.
///
/// `Active` means the player has not yet stayed, busted, or won and will be
/// offered cards on their turns. `Bust` and `Win` are permanent for the
/// round; `Stay` stops further draws but leaves the player eligible for
/// final scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Active,
    Stay,
    Bust,
    Win,
}

/// A hand rarely holds more than a few cards before reaching 21 or busting.
pub type Hand = SmallVec<[Card; 8]>;

/// One player in the session.
///
/// The score is always recomputed from the held cards (see
/// [`crate::round::score_hand`]); it is cached here for display and
/// comparison, never treated as an independent source of truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
    pub score: u32,
    pub status: PlayerStatus,
}

impl Player {
    /// Create a new player with an empty hand, ready to play.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
            status: PlayerStatus::Active,
        }
    }

    /// Reset per-round state, keeping the identity.
    ///
    /// Applied to every surviving player when the session enters a new
    /// round: empty hand, zero score, `Active` status regardless of how the
    /// previous round ended.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.score = 0;
        self.status = PlayerStatus::Active;
    }

    /// Whether this player is still taking turns in the current round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
