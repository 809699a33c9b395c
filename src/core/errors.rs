//! Error taxonomy for the game engine.
//!
//! Every variant is recoverable at some layer: the round absorbs an
//! exhausted supply as an implicit stay, and the interaction boundary
//! re-prompts for bad input before the engine ever sees it.

use thiserror::Error;

/// Engine errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A deal was attempted with no cards remaining in the supply.
    ///
    /// Inside a round this is not fatal: the drawing player is treated as
    /// having stayed.
    #[error("no cards remain in the supply")]
    SupplyExhausted,

    /// The interaction boundary reported a non-positive player count.
    ///
    /// The boundary contract requires validation and retry on its side, so
    /// this only surfaces when a boundary implementation is broken.
    #[error("player count must be positive, got {0}")]
    InvalidPlayerCount(usize),
}
