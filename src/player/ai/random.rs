use crate::core::{Board, Mark, Move};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Plays a uniformly random empty square.
pub struct RandomAI {
    pub mark: Mark,
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self::with_rng(mark, name, StdRng::from_entropy())
    }

    pub fn seeded(mark: Mark, name: &str, seed: u64) -> Self {
        Self::with_rng(mark, name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mark: Mark, name: &str, rng: StdRng) -> Self {
        RandomAI {
            mark,
            name: name.to_string(),
            rng: RefCell::new(rng),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&self, board: &Board) -> anyhow::Result<Option<Move>> {
        let mut rng = self.rng.borrow_mut();
        Ok(board.empty_cells().choose(&mut *rng))
    }
}
