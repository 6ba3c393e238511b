use crate::core::{Mark, Move};
use crate::game::Game;
use crate::player::{MinimaxAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Minimax,
    Random,
}

impl Engine {
    fn controller(self, mark: Mark, seed: Option<u64>) -> Box<dyn PlayerController> {
        let name = format!("{:?}-{}", self, mark);
        match (self, seed) {
            (Engine::Minimax, _) => Box::new(MinimaxAI::new(mark, &name)),
            (Engine::Random, Some(seed)) => Box::new(RandomAI::seeded(mark, &name, seed)),
            (Engine::Random, None) => Box::new(RandomAI::new(mark, &name)),
        }
    }
}

impl FromStr for Engine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Engine::Minimax),
            "random" => Ok(Engine::Random),
            other => anyhow::bail!("unknown engine '{}' (expected minimax or random)", other),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Engine::Minimax => write!(f, "minimax"),
            Engine::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub x_engine: Engine,
    pub o_engine: Engine,
    /// Base seed for random engines; each game derives its own from it.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            x_engine: Engine::Minimax,
            o_engine: Engine::Random,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Mark>,
    pub moves: Vec<Move>,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub x_engine: String,
    pub o_engine: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(config: &SelfPlayConfig) -> Self {
        Self {
            x_engine: config.x_engine.to_string(),
            o_engine: config.o_engine.to_string(),
            ..Self::default()
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves.len()).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
    }
}

/// 自己対局をまとめて実行する (並列)
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    info!(
        games = config.num_games,
        x = %config.x_engine,
        o = %config.o_engine,
        "starting self-play"
    );

    let results = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| play_one(config, game_num))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new(config);
    for result in results {
        stats.add_result(result);
    }

    info!(
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let base = config.seed.map(|s| s.wrapping_add(2 * game_num as u64));
    let x = config.x_engine.controller(Mark::X, base);
    let o = config.o_engine.controller(Mark::O, base.map(|s| s.wrapping_add(1)));

    let record = Game::default().run_silent(x.as_ref(), o.as_ref())?;
    let outcome = record
        .outcome
        .ok_or_else(|| anyhow::anyhow!("game {} ended without a result", game_num))?;
    debug!(game_num, ?outcome, moves = record.moves.len(), "game finished");

    Ok(GameResult {
        winner: outcome.winner(),
        moves: record.moves,
        time_ms: start_time.elapsed().as_millis(),
    })
}
