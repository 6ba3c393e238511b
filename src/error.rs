//! Error types
//!
//! Malformed console input is the only error a game can hit; it is reported
//! to the player and the prompt is repeated. Board setup errors only arise
//! when building positions from strings.

use crate::core::Move;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter numbers.")]
    NotANumber(String),

    #[error("Invalid move. Try again.")]
    OutOfRange(i64),

    #[error("Invalid move. Try again.")]
    Occupied(Move),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("expected 3 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 3")]
    RowWidth { row: usize, width: usize },

    #[error("unknown cell character '{ch}' at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },
}
