use crate::core::{Board, Mark, Move, SIZE};
use crate::error::SetupError;

/// 文字列配列から盤面を初期化する
///
/// Each row is three characters: `X`/`x`, `O`/`o`, or one of ` `, `.`, `-`
/// for an empty square.
pub fn setup_from_strings(rows: &[&str]) -> Result<Board, SetupError> {
    if rows.len() != SIZE {
        return Err(SetupError::RowCount(rows.len()));
    }

    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != SIZE {
            return Err(SetupError::RowWidth {
                row,
                width: chars.len(),
            });
        }
        for (col, ch) in chars.into_iter().enumerate() {
            match ch {
                'X' | 'x' => board.place(Move::new(row, col), Mark::X),
                'O' | 'o' => board.place(Move::new(row, col), Mark::O),
                ' ' | '.' | '-' => {}
                other => return Err(SetupError::UnknownCell { row, col, ch: other }),
            }
        }
    }
    Ok(board)
}
