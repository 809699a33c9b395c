//! Hand valuation and end-of-round scoring.

use crate::cards::Card;
use crate::core::{Player, PlayerStatus};

/// Target score. Hitting it exactly wins the round on the spot; exceeding
/// it busts the player.
pub const TARGET_SCORE: u32 = 21;

/// Recompute a hand's score from scratch.
///
/// A plain sum of per-card point values, so the result is independent of
/// draw order and of any previously cached score.
#[must_use]
pub fn score_hand(hand: &[Card]) -> u32 {
    hand.iter().map(|card| card.point_value()).sum()
}

/// Resolve a round that ended without a 21-hit or single-survivor shortcut.
///
/// Returns the index of the winning player, or `None` if everyone busted.
/// The rules, in order:
/// - a player already marked `Win` wins outright (defensive: the turn
///   machine short-circuits before this path is reached);
/// - otherwise the winner is the *first* player in roster order with status
///   `Stay` whose score equals the maximum stay-score;
/// - a maximum of zero means nobody stayed with points on the table, so
///   there is no winner.
///
/// First-in-roster-order on ties is load-bearing: deterministic tests and
/// the round contract both depend on it.
#[must_use]
pub fn final_scoring(players: &[Player]) -> Option<usize> {
    let mut high_score = 0;
    for player in players {
        if player.status == PlayerStatus::Win {
            return players.iter().position(|p| p.status == PlayerStatus::Win);
        }
        if player.status == PlayerStatus::Stay && player.score > high_score {
            high_score = player.score;
        }
    }

    if high_score > 0 {
        players
            .iter()
            .position(|p| p.status == PlayerStatus::Stay && p.score == high_score)
    } else {
        None
    }
}
