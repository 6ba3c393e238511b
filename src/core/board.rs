use super::r#move::Move;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIZE: usize = 3;

/// 盤面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    pub fn place(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row][mv.col] = Cell::Taken(mark);
    }

    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = Cell::Empty;
    }

    /// Empty squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.is_empty_at(mv))
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Taken(mark))
            .count()
    }

    /// X moves first, so X is to move whenever the counts are level.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.display_char().to_string()).collect();
            writeln!(f, "{}", line.join(" | "))?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_row_major() {
        let mut board = Board::new();
        board.place(Move::new(0, 1), Mark::X);
        board.place(Move::new(2, 0), Mark::O);

        let cells: Vec<Move> = board.empty_cells().collect();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], Move::new(0, 0));
        assert_eq!(cells[1], Move::new(0, 2));
        assert_eq!(cells[6], Move::new(2, 2));
        assert!(!cells.contains(&Move::new(2, 0)));
    }

    #[test]
    fn side_to_move_follows_counts() {
        let mut board = Board::new();
        assert_eq!(board.side_to_move(), Mark::X);
        board.place(Move::new(1, 1), Mark::X);
        assert_eq!(board.side_to_move(), Mark::O);
        board.place(Move::new(0, 0), Mark::O);
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn place_and_clear_restore_board() {
        let mut board = Board::new();
        let before = board;
        board.place(Move::new(2, 2), Mark::O);
        assert!(!board.is_empty_at(Move::new(2, 2)));
        board.clear(Move::new(2, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn display_uses_pipes_and_dashes() {
        let mut board = Board::new();
        board.place(Move::new(0, 0), Mark::X);
        board.place(Move::new(1, 2), Mark::O);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "X |   |  ",
                "---------",
                "  |   | O",
                "---------",
                "  |   |  ",
                "---------",
            ]
        );
    }
}
