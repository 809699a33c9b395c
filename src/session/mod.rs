//! The multi-round session and its continuation protocol.
//!
//! A [`Session`] owns the roster, the card supply, and the RNG streams. It
//! invokes [`RoundEngine`] to run each round to completion, then applies the
//! continuation protocol:
//!
//! 1. Ask every player — busted and winning players included — whether they
//!    want another round. Continuation is a session-level choice, not a
//!    reward for winning.
//! 2. Rebuild the roster from the survivors (decisions are collected first;
//!    the roster is never mutated while it is being iterated).
//! 3. Degenerate outcomes, in priority order: zero survivors end the
//!    session; a single survivor is announced as the default winner and may
//!    trigger a fresh full restart; two or more proceed.
//! 4. Reshuffle the supply, reset every survivor, shuffle the survivor
//!    order, and re-enter the round machine at `IntroducePlayers`.

use tracing::{debug, info};

use crate::cards::Deck;
use crate::core::{GameError, GameRng, Player};
use crate::round::{RoundEngine, RoundOutcome, RoundTask};
use crate::table::CardTable;

/// What the continuation protocol decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// Two or more survivors: play another round with the existing roster.
    NextRound,
    /// Single survivor asked for a restart: collect a brand new roster.
    FreshStart,
    /// The session is over.
    End,
}

/// A full multi-round session against one interaction boundary.
pub struct Session<T: CardTable> {
    table: T,
    players: Vec<Player>,
    deck: Deck,
    /// Stream for deck shuffles. Kept separate from the roster stream so a
    /// test can pin one permutation without disturbing the other.
    deck_rng: GameRng,
    /// Stream for survivor reordering between rounds.
    roster_rng: GameRng,
    last_outcome: Option<RoundOutcome>,
}

impl<T: CardTable> Session<T> {
    /// Create a session. All randomness derives from `seed`, so an entire
    /// session is replayable.
    #[must_use]
    pub fn new(table: T, seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            table,
            players: Vec::new(),
            deck: Deck::standard_52(),
            deck_rng: root.for_context("deck"),
            roster_rng: root.for_context("roster"),
            last_outcome: None,
        }
    }

    /// The current roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The outcome of the most recently completed round.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// The interaction boundary, for inspection.
    #[must_use]
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Play rounds until the session terminates.
    pub fn run(&mut self) -> Result<(), GameError> {
        let mut entry = RoundTask::CollectPlayerCount;
        loop {
            self.play_round(entry)?;
            match self.resolve_continuation() {
                Continuation::NextRound => entry = RoundTask::IntroducePlayers,
                Continuation::FreshStart => entry = RoundTask::CollectPlayerCount,
                Continuation::End => {
                    info!("session over");
                    return Ok(());
                }
            }
        }
    }

    /// Run a single round from the given entry state.
    ///
    /// Entering at `CollectPlayerCount` means a fresh session or restart:
    /// the roster is discarded and the supply reshuffled before play.
    pub fn play_round(&mut self, entry: RoundTask) -> Result<RoundOutcome, GameError> {
        if matches!(entry, RoundTask::CollectPlayerCount) {
            self.players.clear();
            self.deck.shuffle(&mut self.deck_rng);
        }

        let engine = RoundEngine::new(&mut self.players, &mut self.deck, &mut self.table);
        let outcome = engine.run(entry)?;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Apply the inter-round continuation protocol and report what comes
    /// next. Callers normally let [`Session::run`] drive this; it is public
    /// so the protocol can be exercised step by step.
    pub fn resolve_continuation(&mut self) -> Continuation {
        let table = &mut self.table;
        let decisions: Vec<bool> = self
            .players
            .iter()
            .map(|player| table.ask_continue(player))
            .collect();

        let mut survivors: Vec<Player> = self
            .players
            .drain(..)
            .zip(decisions)
            .filter_map(|(player, stays)| stays.then_some(player))
            .collect();
        debug!(survivors = survivors.len(), "continuation poll complete");

        match survivors.len() {
            0 => Continuation::End,
            1 => {
                // Last player standing wins the session by default.
                self.table.announce_winner(Some(&survivors[0]));
                self.players = survivors;
                if self.table.ask_restart() {
                    Continuation::FreshStart
                } else {
                    Continuation::End
                }
            }
            _ => {
                self.deck.shuffle(&mut self.deck_rng);
                for player in &mut survivors {
                    player.reset_for_round();
                }
                self.roster_rng.shuffle(&mut survivors);
                self.players = survivors;
                Continuation::NextRound
            }
        }
    }
}
