use crate::core::{Board, Mark, Move, Score};
use crate::logic::evaluate;
use crate::player::PlayerController;
use tracing::{debug, instrument};

/// 局面の minimax 値 (X 視点)
///
/// Walks the whole remaining game tree with no pruning. Every mark placed
/// on `board` is removed again before the next sibling is tried, so the board
/// is unchanged when this returns.
pub fn score(board: &mut Board, maximizer_turn: bool) -> Score {
    if let Some(value) = evaluate(board).score() {
        return value;
    }

    let mover = if maximizer_turn { Mark::X } else { Mark::O };
    let moves: Vec<Move> = board.empty_cells().collect();

    let mut best = if maximizer_turn { Score::MIN } else { Score::MAX };
    for mv in moves {
        board.place(mv, mover);
        let value = score(board, !maximizer_turn);
        board.clear(mv);

        best = if maximizer_turn {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Best square for X. Ties go to the earliest square in row-major order.
pub fn find_best_move(board: &mut Board) -> Option<Move> {
    best_move(board, Mark::X)
}

/// Best square for `mark`: X maximizes, O minimizes.
///
/// Only a strictly better score replaces the current choice, so the first
/// square found keeps equal-valued alternatives out. Returns `None` when the
/// board is full.
#[instrument(level = "debug", skip(board))]
pub fn best_move(board: &mut Board, mark: Mark) -> Option<Move> {
    let moves: Vec<Move> = board.empty_cells().collect();
    let mut best: Option<(Move, Score)> = None;

    for mv in moves {
        board.place(mv, mark);
        // 相手の手番
        let value = score(board, mark.opponent().is_maximizer());
        board.clear(mv);

        let improves = match best {
            None => true,
            Some((_, current)) if mark.is_maximizer() => value > current,
            Some((_, current)) => value < current,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    if let Some((mv, value)) = best {
        debug!(%mv, value, "selected move");
    }
    best.map(|(mv, _)| mv)
}

pub struct MinimaxAI {
    pub mark: Mark,
    pub name: String,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board) -> anyhow::Result<Option<Move>> {
        let mut scratch = *board;
        Ok(best_move(&mut scratch, self.mark))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;

    fn board(rows: [&str; 3]) -> Board {
        setup_from_strings(&rows).unwrap()
    }

    #[test]
    fn terminal_positions_score_immediately() {
        assert_eq!(score(&mut board(["XXX", "OO ", "   "]), false), 1);
        assert_eq!(score(&mut board(["OOO", "XX ", "X  "]), true), -1);
        assert_eq!(score(&mut board(["XOX", "XOO", "OXX"]), true), 0);
    }

    #[test]
    fn empty_board_is_a_draw() {
        assert_eq!(score(&mut Board::new(), true), 0);
    }

    #[test]
    fn side_to_move_wins_with_open_line() {
        assert_eq!(score(&mut board(["XX ", "OO ", "   "]), true), 1);
        assert_eq!(score(&mut board(["OO ", "XX ", "X  "]), false), -1);
    }

    #[test]
    fn full_board_has_no_move() {
        let mut full = board(["XOX", "XOO", "OXX"]);
        assert_eq!(find_best_move(&mut full), None);
        assert_eq!(best_move(&mut full, Mark::O), None);
    }

    #[test]
    fn last_empty_square_is_returned() {
        let mut b = board(["XOX", "XOO", "OX "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(2, 2)));
    }

    #[test]
    fn ai_does_not_touch_callers_board() {
        let b = board(["X  ", " O ", "   "]);
        let ai = MinimaxAI::new(Mark::X, "Minimax AI");
        let mv = ai.choose_move(&b).unwrap();
        assert!(mv.is_some());
        assert_eq!(b, board(["X  ", " O ", "   "]));
    }
}
