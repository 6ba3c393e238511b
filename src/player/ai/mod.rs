pub mod minimax;
pub mod random;

pub use minimax::{best_move, find_best_move, score, MinimaxAI};
pub use random::RandomAI;
