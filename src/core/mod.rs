pub mod board;
pub mod r#move;
pub mod setup;
pub mod types;

pub use board::{Board, SIZE};
pub use r#move::Move;
pub use setup::setup_from_strings;
pub use types::{Cell, Mark, Outcome, Score};
