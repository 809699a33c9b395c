//! # race21
//!
//! A multi-round, multi-player "race to 21" card game engine.
//!
//! Players draw cards in turn until they stop, bust, or hit 21 exactly; the
//! round resolves by comparing scores; players then vote to continue into a
//! reshuffled round or end the session.
//!
//! ## Design
//!
//! - **Pluggable boundary**: the engine never performs I/O. Every prompt and
//!   display goes through the [`table::CardTable`] trait; the CLI plugs in a
//!   console implementation, tests plug in a scripted one.
//! - **Explicit state machine**: a round is a tagged [`round::RoundTask`]
//!   with one handler per state returning the next state.
//! - **Seedable randomness**: deck shuffles and survivor reordering run on
//!   independent [`core::GameRng`] streams derived from one seed, so whole
//!   sessions replay deterministically.
//!
//! ## Modules
//!
//! - `core`: players, errors, RNG
//! - `cards`: card identity, valuation, and the card supply
//! - `round`: the single-round turn state machine and scoring
//! - `session`: the inter-round continuation protocol
//! - `table`: the interaction boundary trait and console implementation

pub mod cards;
pub mod core;
pub mod round;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Rank, Suit};
pub use crate::core::{GameError, GameRng, Player, PlayerStatus};
pub use crate::round::{RoundEngine, RoundOutcome, RoundTask, TARGET_SCORE};
pub use crate::session::{Continuation, Session};
pub use crate::table::{CardTable, ConsoleTable};
