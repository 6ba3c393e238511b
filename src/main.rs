use std::io;
use tictactoe_minimax::core::Mark;
use tictactoe_minimax::game::Game;
use tictactoe_minimax::player::{ConsoleController, MinimaxAI};

fn main() -> anyhow::Result<()> {
    tictactoe_minimax::init_logging();

    // 人間が X で先手
    let human = ConsoleController::new(Mark::X, "Player");
    let computer = MinimaxAI::new(Mark::O, "Computer");

    let mut game = Game::default();
    game.play(&human, &computer, &mut io::stdout())?;
    Ok(())
}
