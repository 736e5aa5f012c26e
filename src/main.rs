//! Quiz Game CLI
//!
//! Loads (or interactively authors) a question set and runs every player
//! through it, round after round.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --questions science.csv --players 2
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to see draws and scoring on stderr

use clap::Parser;
use log::info;
use quiz_game::{author_question_set, greeting, Cli, Console, Game, GameConfig, QuestionBank, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, questions) = cli.into_config()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.say(&greeting(&config))?;
    console.blank_line()?;

    let bank = match questions {
        Some(path) => QuestionBank::load(path)?,
        None => choose_question_set(&mut console)?,
    };

    let seed = config.resolve_seed();
    info!("Session seed {}", seed);

    let mut game = Game::new(bank, config, GameConfig::rng(seed));
    game.run(&mut console)?;
    Ok(())
}

fn choose_question_set<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<QuestionBank> {
    if console.ask_yes_no("Do you want to create a new question set? (yes/no): ")? {
        let path = ask_path(
            console,
            "Enter a filename for this question set (e.g., 'history.csv'): ",
        )?;
        author_question_set(console, &path)
    } else {
        let path = ask_path(
            console,
            "Enter the filename of the question set to use (e.g., 'science.csv'): ",
        )?;
        QuestionBank::load(path)
    }
}

fn ask_path<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<PathBuf> {
    let name = console.ask_non_empty(prompt, "Filename cannot be empty. Try again.")?;
    Ok(PathBuf::from(name))
}
