//! Errors raised while parsing, decoding or validating snapshots.

use thiserror::Error;

use crate::cards::Card;
use crate::table::RoundStep;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid card index {0}, expected 0..52")]
    InvalidCardIndex(u8),

    #[error("cannot parse card '{0}'")]
    InvalidCard(String),

    #[error("invalid round step {0}")]
    InvalidRoundStep(u8),

    #[error("seat {seat} out of range for a table of {seats} seats")]
    SeatOutOfRange { seat: usize, seats: usize },

    #[error("seat {0} is empty")]
    EmptySeat(usize),

    #[error("player '{nick}' holds {count} cards, expected 0 or {expected}")]
    HoleCardCount {
        nick: String,
        count: usize,
        expected: usize,
    },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("{count} board cards at {step:?}, at most {max} allowed")]
    BoardTooLarge {
        count: usize,
        step: RoundStep,
        max: usize,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
