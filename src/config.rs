//! Session configuration and command-line arguments.

use crate::error::{QuizError, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

pub const DEFAULT_STARTING_MONEY: i64 = 500;
pub const DEFAULT_PLAYERS: usize = 4;

/// Parameters fixed for a whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Money every player starts each turn with.
    pub starting_money: i64,

    /// Number of players taking turns, in registration order.
    pub players: usize,

    /// Seed for question draws. `None` picks a fresh one per session.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_money: DEFAULT_STARTING_MONEY,
            players: DEFAULT_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.players == 0 {
            return Err(QuizError::InvalidConfig {
                message: "at least one player is required".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the seed to use: the configured one, or a random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }

    /// Builds the draw RNG for a resolved seed.
    pub fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "quiz-game")]
#[command(about = "Turn-based trivia: correct answers double your money, wrong ones halve it")]
pub struct Cli {
    /// Question set to play (`question,answer` per line). When omitted you are
    /// asked whether to author a new set or load an existing one.
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Number of players
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    pub players: usize,

    /// Money each player starts a turn with
    #[arg(short = 'm', long, default_value_t = DEFAULT_STARTING_MONEY, allow_negative_numbers = true)]
    pub starting_money: i64,

    /// Seed for question order, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Splits the arguments into a validated config and the optional question file.
    pub fn into_config(self) -> Result<(GameConfig, Option<PathBuf>)> {
        let config = GameConfig {
            starting_money: self.starting_money,
            players: self.players,
            seed: self.seed,
        };
        config.validate()?;
        Ok((config, self.questions))
    }
}
