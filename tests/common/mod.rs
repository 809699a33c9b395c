//! Shared test double for the interaction boundary.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::VecDeque;

use race21::core::Player;
use race21::table::CardTable;

/// A `CardTable` that answers from pre-scripted queues and records what the
/// engine asked of it.
///
/// Unscripted yes/no questions default to "no" (stay / don't continue /
/// don't restart) so an exhausted script winds a game down instead of
/// panicking mid-state-machine.
#[derive(Debug, Default)]
pub struct ScriptedTable {
    counts: VecDeque<usize>,
    names: VecDeque<String>,
    draws: VecDeque<bool>,
    continues: VecDeque<bool>,
    restarts: VecDeque<bool>,

    /// Names of players offered a card, in offer order.
    pub offers: Vec<String>,
    /// Announced round outcomes (winner name or `None`), in order.
    pub announcements: Vec<Option<String>>,
    /// Names of players polled for continuation, in poll order.
    pub continue_polls: Vec<String>,
}

impl ScriptedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.counts.push_back(count);
        self
    }

    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_draws(mut self, draws: &[bool]) -> Self {
        self.draws.extend(draws.iter().copied());
        self
    }

    pub fn with_continues(mut self, answers: &[bool]) -> Self {
        self.continues.extend(answers.iter().copied());
        self
    }

    pub fn with_restarts(mut self, answers: &[bool]) -> Self {
        self.restarts.extend(answers.iter().copied());
        self
    }

    /// Draw decisions not yet consumed.
    pub fn remaining_draws(&self) -> usize {
        self.draws.len()
    }
}

impl CardTable for ScriptedTable {
    fn get_player_count(&mut self) -> usize {
        self.counts.pop_front().expect("no player count scripted")
    }

    fn get_player_name(&mut self, _ordinal: usize) -> String {
        self.names.pop_front().expect("no player name scripted")
    }

    fn show_players(&mut self, _players: &[Player]) {}

    fn offer_card(&mut self, player: &Player) -> bool {
        self.offers.push(player.name.clone());
        self.draws.pop_front().unwrap_or(false)
    }

    fn show_hand(&mut self, _player: &Player) {}

    fn announce_winner(&mut self, winner: Option<&Player>) {
        self.announcements.push(winner.map(|p| p.name.clone()));
    }

    fn ask_continue(&mut self, player: &Player) -> bool {
        self.continue_polls.push(player.name.clone());
        self.continues.pop_front().unwrap_or(false)
    }

    fn ask_restart(&mut self) -> bool {
        self.restarts.pop_front().unwrap_or(false)
    }
}
