//! Self-play harness
//!
//! Usage: selfplay [NUM_GAMES] [X_ENGINE] [O_ENGINE] [SEED]
//! Engines are `minimax` or `random`. Prints the statistics as JSON.

use std::env;
use tictactoe_minimax::selfplay::{run_selfplay, SelfPlayConfig};

fn main() -> anyhow::Result<()> {
    tictactoe_minimax::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: selfplay [NUM_GAMES] [X_ENGINE] [O_ENGINE] [SEED]");
        return Ok(());
    }

    let mut config = SelfPlayConfig::default();
    if let Some(n) = args.first() {
        config.num_games = n.parse()?;
    }
    if let Some(engine) = args.get(1) {
        config.x_engine = engine.parse()?;
    }
    if let Some(engine) = args.get(2) {
        config.o_engine = engine.parse()?;
    }
    if let Some(seed) = args.get(3) {
        config.seed = Some(seed.parse()?);
    }

    let stats = run_selfplay(&config)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
