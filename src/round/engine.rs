//! The turn state machine for a single round.
//!
//! ## States
//!
//! `CollectPlayerCount → CollectNames → IntroducePlayers → PlayerTurn ⇄
//! CheckRoundEnd → RoundOver`
//!
//! Each state has one handler that returns the next state; a small loop in
//! [`RoundEngine::run`] drives the machine until `RoundOver`. The state is
//! an explicit tagged value, never a shared mutable field, so there is no
//! recursion on game over and every exit path is visible in one place.
//!
//! A round ends by one of four paths:
//! - a player hits 21 exactly and wins on the spot (no later player acts);
//! - exactly one non-busted player remains and wins by default;
//! - nobody has drawn a card when `CheckRoundEnd` runs, which resolves by
//!   final scoring (with empty hands this yields no winner);
//! - everyone has resolved to stay/bust, which resolves by final scoring.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{GameError, Player, PlayerStatus};
use crate::round::scoring::{final_scoring, score_hand, TARGET_SCORE};
use crate::table::CardTable;

/// What a completed round produced.
///
/// Carries the winner's *name* rather than a roster index: the session
/// reorders the roster between rounds, so an index would dangle by the time
/// a caller looks at the previous outcome. "No winner" is a legitimate
/// outcome (everyone busted, or nobody drew), not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Winner(String),
    NoWinner,
}

impl RoundOutcome {
    /// The winner's name, if the round had one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            RoundOutcome::Winner(name) => Some(name),
            RoundOutcome::NoWinner => None,
        }
    }
}

/// The tagged state of the round machine.
///
/// A fresh session enters at `CollectPlayerCount`; subsequent rounds reuse
/// the roster and enter at `IntroducePlayers`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundTask {
    CollectPlayerCount,
    CollectNames { count: usize },
    IntroducePlayers,
    PlayerTurn,
    CheckRoundEnd,
    RoundOver(RoundOutcome),
}

/// Runs one round to completion against a borrowed roster, supply, and
/// interaction boundary.
///
/// The engine holds mutable views for the round's duration only; the
/// session owns the underlying state and decides what happens between
/// rounds.
pub struct RoundEngine<'a, T: CardTable> {
    players: &'a mut Vec<Player>,
    deck: &'a mut Deck,
    table: &'a mut T,
    /// Index of the player whose turn it is.
    current: usize,
    /// Whether anyone has drawn a card this round. A false flag at
    /// `CheckRoundEnd` means the round resolves immediately.
    any_card_drawn: bool,
}

impl<'a, T: CardTable> RoundEngine<'a, T> {
    pub fn new(players: &'a mut Vec<Player>, deck: &'a mut Deck, table: &'a mut T) -> Self {
        Self {
            players,
            deck,
            table,
            current: 0,
            any_card_drawn: false,
        }
    }

    /// Drive the machine from `entry` until the round is over.
    ///
    /// Returns the outcome after announcing it through the boundary. The
    /// outcome is announced exactly once per round, here.
    pub fn run(mut self, entry: RoundTask) -> Result<RoundOutcome, GameError> {
        let mut task = entry;
        loop {
            debug!(?task, "round task");
            task = match task {
                RoundTask::CollectPlayerCount => self.collect_player_count()?,
                RoundTask::CollectNames { count } => self.collect_names(count),
                RoundTask::IntroducePlayers => self.introduce_players(),
                RoundTask::PlayerTurn => self.player_turn(),
                RoundTask::CheckRoundEnd => self.check_round_end(),
                RoundTask::RoundOver(outcome) => {
                    self.finalize(&outcome);
                    return Ok(outcome);
                }
            };
        }
    }

    fn collect_player_count(&mut self) -> Result<RoundTask, GameError> {
        let count = self.table.get_player_count();
        if count == 0 {
            // The boundary contract says this cannot happen; fail loudly
            // instead of looping on an empty roster.
            return Err(GameError::InvalidPlayerCount(count));
        }
        Ok(RoundTask::CollectNames { count })
    }

    fn collect_names(&mut self, count: usize) -> RoundTask {
        self.players.clear();
        for ordinal in 1..=count {
            let name = self.table.get_player_name(ordinal);
            self.players.push(Player::new(name));
        }
        RoundTask::IntroducePlayers
    }

    fn introduce_players(&mut self) -> RoundTask {
        self.table.show_players(self.players);
        self.any_card_drawn = false;
        self.current = 0;
        RoundTask::PlayerTurn
    }

    /// Offer the current player a draw decision.
    ///
    /// Players who already stayed, busted, or won are skipped for the offer
    /// but still shown. An exhausted supply turns the draw into an implicit
    /// stay rather than an error.
    fn player_turn(&mut self) -> RoundTask {
        if self.players[self.current].is_active() {
            if self.table.offer_card(&self.players[self.current]) {
                match self.deck.deal_top() {
                    Ok(card) => {
                        let player = &mut self.players[self.current];
                        player.hand.push(card);
                        player.score = score_hand(&player.hand);
                        self.any_card_drawn = true;
                        debug!(player = %player.name, %card, score = player.score, "drew");

                        if player.score > TARGET_SCORE {
                            player.status = PlayerStatus::Bust;
                        } else if player.score == TARGET_SCORE {
                            // Immediate win: the round ends here and no
                            // later player acts.
                            player.status = PlayerStatus::Win;
                            let name = player.name.clone();
                            self.table.show_hand(&self.players[self.current]);
                            return RoundTask::RoundOver(RoundOutcome::Winner(name));
                        }
                    }
                    // Only exhaustion can occur here; the player simply
                    // cannot draw further.
                    Err(_) => {
                        self.players[self.current].status = PlayerStatus::Stay;
                    }
                }
            } else {
                self.players[self.current].status = PlayerStatus::Stay;
            }
        }

        self.table.show_hand(&self.players[self.current]);
        RoundTask::CheckRoundEnd
    }

    fn check_round_end(&mut self) -> RoundTask {
        // Nobody has drawn yet: resolve right away. With empty hands this
        // produces "no winner"; later players are not offered a card.
        if !self.any_card_drawn {
            return self.resolve_by_final_scoring();
        }

        // A single non-busted player wins by default, whatever their status.
        let standing: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.status != PlayerStatus::Bust)
            .map(|(idx, _)| idx)
            .collect();
        if let [idx] = standing[..] {
            self.players[idx].status = PlayerStatus::Win;
            let name = self.players[idx].name.clone();
            return RoundTask::RoundOver(RoundOutcome::Winner(name));
        }

        // Everyone has resolved to stay/bust/win: compare the stayers.
        if !self.players.iter().any(Player::is_active) {
            return self.resolve_by_final_scoring();
        }

        self.current = (self.current + 1) % self.players.len();
        RoundTask::PlayerTurn
    }

    fn resolve_by_final_scoring(&mut self) -> RoundTask {
        for player in self.players.iter() {
            self.table.show_hand(player);
        }
        let outcome = match final_scoring(self.players) {
            Some(idx) => RoundOutcome::Winner(self.players[idx].name.clone()),
            None => RoundOutcome::NoWinner,
        };
        RoundTask::RoundOver(outcome)
    }

    fn finalize(&mut self, outcome: &RoundOutcome) {
        info!(winner = outcome.winner().unwrap_or("nobody"), "round over");
        let winner = outcome
            .winner()
            .and_then(|name| self.players.iter().find(|p| p.name == name));
        self.table.announce_winner(winner);
    }
}
