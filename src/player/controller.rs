use crate::core::{Board, Mark, Move};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// `Ok(None)` means the player cannot or will not move.
    fn choose_move(&self, board: &Board) -> anyhow::Result<Option<Move>>;
    fn name(&self) -> &str;
    fn mark(&self) -> Mark;
}
