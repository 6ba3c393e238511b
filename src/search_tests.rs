#[cfg(test)]
mod tests {
    use crate::core::{setup_from_strings, Board, Mark, Move, Outcome};
    use crate::logic::evaluate;
    use crate::player::ai::{best_move, find_best_move, score};

    fn board(rows: [&str; 3]) -> Board {
        setup_from_strings(&rows).unwrap()
    }

    #[test]
    fn test_empty_board_opens_in_top_left_corner() {
        // every opening draws, so the first square in row-major order is kept
        let mut b = Board::new();
        assert_eq!(find_best_move(&mut b), Some(Move::new(0, 0)));
    }

    #[test]
    fn test_immediate_win_beats_block() {
        let mut b = board(["XX ", "OO ", "   "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_completes_own_line() {
        let mut b = board(["X X", " O ", "O  "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(0, 1)));

        // O threatens (2, 1) but X finishes the column first
        let mut b = board(["XO ", "XO ", "   "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(2, 0)));
    }

    #[test]
    fn test_ties_keep_first_square() {
        // (1, 0), (1, 1) and (2, 0) all force a win
        let mut b = board(["XO ", "   ", "   "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_blocks_threat() {
        let mut b = board(["X  ", "OO ", "X  "]);
        assert_eq!(find_best_move(&mut b), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_o_side_search() {
        // O wins at once rather than blocking X's row
        let mut b = board(["OO ", "XX ", "X  "]);
        assert_eq!(best_move(&mut b, Mark::O), Some(Move::new(0, 2)));

        // O blocks the diagonal
        let mut b = board(["X O", " X ", "   "]);
        assert_eq!(best_move(&mut b, Mark::O), Some(Move::new(2, 2)));

        // only the centre holds against a corner opening
        let mut b = board(["X  ", "   ", "   "]);
        assert_eq!(best_move(&mut b, Mark::O), Some(Move::new(1, 1)));
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        for rows in [
            ["   ", "   ", "   "],
            ["XX ", "OO ", "   "],
            ["X  ", " O ", "  X"],
            ["XOX", "XOO", "OX "],
            ["XOX", "XOO", "OXX"],
        ] {
            let original = board(rows);
            let mut b = original;

            score(&mut b, true);
            assert_eq!(b, original);
            score(&mut b, false);
            assert_eq!(b, original);
            find_best_move(&mut b);
            assert_eq!(b, original);
            best_move(&mut b, Mark::O);
            assert_eq!(b, original);
        }
    }

    #[test]
    fn test_perfect_play_is_a_draw() {
        let mut b = Board::new();
        let mut mark = Mark::X;
        while !evaluate(&b).is_terminal() {
            let mv = best_move(&mut b, mark).unwrap();
            b.place(mv, mark);
            mark = mark.opponent();
        }
        assert_eq!(evaluate(&b), Outcome::Draw);
    }

    #[test]
    fn test_every_opening_is_held_by_o() {
        for opening in Board::new().empty_cells() {
            let mut b = Board::new();
            b.place(opening, Mark::X);
            assert_eq!(score(&mut b, false), 0, "opening {}", opening);
        }
    }
}
