//! Single-round game flow: the turn state machine and scoring.

pub mod engine;
pub mod scoring;

pub use engine::{RoundEngine, RoundOutcome, RoundTask};
pub use scoring::{final_scoring, score_hand, TARGET_SCORE};
