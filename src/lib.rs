//! # Quiz Game
//!
//! A turn-based console trivia game. Questions come from a
//! `question,answer` text file (or are authored interactively), and every
//! player takes a turn through the whole set in random order.
//!
//! ## Rules
//!
//! - **Doubling/halving**: a correct answer doubles the player's money, a
//!   wrong one halves it (integer division)
//! - **Retry until done**: a wrong answer asks the same question again
//!   until the player gets it right or types `PASS`
//! - **No repeats**: within a turn every question is asked exactly once
//! - **Fresh start**: money resets to the starting amount for every turn
//!
//! ## Example
//!
//! ```no_run
//! use quiz_game::{Console, Game, GameConfig, QuestionBank};
//! use std::io;
//!
//! let bank = QuestionBank::from_lines(["2+2?,4", "Capital of France?,Paris"]).unwrap();
//! let config = GameConfig::default();
//! let rng = GameConfig::rng(config.resolve_seed());
//!
//! let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
//! Game::new(bank, config, rng).run(&mut console).unwrap();
//! ```

pub mod authoring;
pub mod bank;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod question;
pub mod scoring;
pub mod turn;

pub use authoring::author_question_set;
pub use bank::QuestionBank;
pub use config::{Cli, GameConfig};
pub use console::Console;
pub use error::{QuizError, Result};
pub use game::{greeting, Game, Player, PlayerResult};
pub use question::{QuestionRecord, PASS_KEYWORD};
pub use scoring::update_money;
pub use turn::{Attempt, Response, RoundState, TurnEngine, TurnSummary};
