use crate::core::{Board, Mark, Move, Outcome};
use crate::display::{render_board, render_outcome, render_status};
use crate::logic::evaluate;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info};

/// 棋譜
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
}

pub struct Game {
    pub board: Board,
    pub current: Mark,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

impl Game {
    pub fn new(board: Board) -> Self {
        let current = board.side_to_move();
        Game { board, current }
    }

    /// 対局ループ
    ///
    /// Prints the board every turn, stops at the first terminal outcome and
    /// returns it. A player that declines to move ends the game as
    /// `Outcome::Undecided`.
    pub fn play<W: Write>(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
        out: &mut W,
    ) -> anyhow::Result<Outcome> {
        check_seats(x, o)?;
        loop {
            render_board(out, &self.board)?;

            let outcome = evaluate(&self.board);
            if outcome.is_terminal() {
                render_outcome(out, outcome)?;
                info!(?outcome, "game over");
                return Ok(outcome);
            }

            let controller = self.controller(x, o);
            render_status(
                out,
                &format!("{}'s turn ({}):", controller.name(), self.current),
            )?;

            match controller.choose_move(&self.board)? {
                Some(mv) => self.apply(mv)?,
                None => {
                    render_status(out, &format!("{} left the game.", controller.name()))?;
                    info!(player = controller.name(), "game abandoned");
                    return Ok(Outcome::Undecided);
                }
            }
        }
    }

    /// 表示なしで最後まで対局する
    pub fn run_silent(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
    ) -> anyhow::Result<GameRecord> {
        check_seats(x, o)?;
        let mut record = GameRecord::default();
        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_terminal() {
                record.outcome = Some(outcome);
                return Ok(record);
            }

            let controller = self.controller(x, o);
            match controller.choose_move(&self.board)? {
                Some(mv) => {
                    self.apply(mv)?;
                    record.moves.push(mv);
                }
                None => return Ok(record),
            }
        }
    }

    fn controller<'a>(
        &self,
        x: &'a dyn PlayerController,
        o: &'a dyn PlayerController,
    ) -> &'a dyn PlayerController {
        match self.current {
            Mark::X => x,
            Mark::O => o,
        }
    }

    fn apply(&mut self, mv: Move) -> anyhow::Result<()> {
        anyhow::ensure!(
            mv.in_bounds() && self.board.is_empty_at(mv),
            "{} played an illegal move {}",
            self.current,
            mv
        );
        debug!(mark = %self.current, %mv, "move applied");
        self.board.place(mv, self.current);
        self.current = self.current.opponent();
        Ok(())
    }
}

fn check_seats(x: &dyn PlayerController, o: &dyn PlayerController) -> anyhow::Result<()> {
    anyhow::ensure!(
        x.mark() == Mark::X && o.mark() == Mark::O,
        "{} must play X and {} must play O",
        x.name(),
        o.name()
    );
    Ok(())
}
