//! Core types: players, errors, RNG.

pub mod errors;
pub mod player;
pub mod rng;

pub use errors::GameError;
pub use player::{Hand, Player, PlayerStatus};
pub use rng::GameRng;
