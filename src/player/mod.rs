pub mod ai;
pub mod console;
pub mod controller;

pub use ai::{MinimaxAI, RandomAI};
pub use console::ConsoleController;
pub use controller::PlayerController;
