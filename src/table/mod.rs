//! The interaction boundary.
//!
//! The engine never reads input or writes output itself; every prompt and
//! display goes through [`CardTable`]. Implementations are responsible for
//! validation and retry: by the time a call returns, the engine holds a
//! usable value (a positive count, a resolved yes/no).
//!
//! [`ConsoleTable`] is the stdin/stdout implementation used by the CLI;
//! tests drive the engine with a scripted double instead.

pub mod console;

pub use console::ConsoleTable;

use crate::core::Player;

/// Abstract interaction capability between the engine and the outside world.
///
/// All suspension points in the engine are synchronous calls into this
/// trait; they block until a response is available. Methods take `&mut self`
/// so implementations can keep prompt state (a console buffers, a scripted
/// test double consumes queues).
pub trait CardTable {
    /// Ask how many players will join. Must return a positive integer;
    /// re-prompting on invalid input is the implementation's job.
    fn get_player_count(&mut self) -> usize;

    /// Ask for the name of player `ordinal` (1-based, display only).
    fn get_player_name(&mut self, ordinal: usize) -> String;

    /// Publish the roster at the start of a round.
    fn show_players(&mut self, players: &[Player]);

    /// Offer the player a card. `true` means draw, `false` means stay.
    fn offer_card(&mut self, player: &Player) -> bool;

    /// Display a player's current hand and status.
    fn show_hand(&mut self, player: &Player);

    /// Announce the round outcome. `None` means nobody won the round.
    fn announce_winner(&mut self, winner: Option<&Player>);

    /// Ask whether this player wants to continue into another round.
    fn ask_continue(&mut self, player: &Player) -> bool;

    /// Ask whether to restart with a fresh roster. Only reached in the
    /// single-survivor degenerate case.
    fn ask_restart(&mut self) -> bool;
}
