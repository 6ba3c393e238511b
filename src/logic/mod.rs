use crate::core::{Board, Cell, Mark, Move, Outcome, SIZE};
use crate::error::InputError;

/// 勝利ライン: 行 → 列 → 対角線の順
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 盤面の勝敗判定
///
/// The first complete line in [`LINES`] order decides the winner; a full
/// board without one is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        if let Some(mark) = line_owner(board, line) {
            return Outcome::Win(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

fn line_owner(board: &Board, line: [(usize, usize); 3]) -> Option<Mark> {
    let [a, b, c] = line.map(|(row, col)| board.get(Move::new(row, col)));
    match a {
        Cell::Taken(mark) if a == b && b == c => Some(mark),
        _ => None,
    }
}

/// 人間の入力を検証して着手に変換する
pub fn validate_move(board: &Board, row: i64, col: i64) -> Result<Move, InputError> {
    let to_index = |n: i64| match usize::try_from(n) {
        Ok(i) if i < SIZE => Ok(i),
        _ => Err(InputError::OutOfRange(n)),
    };
    let mv = Move::new(to_index(row)?, to_index(col)?);
    if !board.is_empty_at(mv) {
        return Err(InputError::Occupied(mv));
    }
    Ok(mv)
}
