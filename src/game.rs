//! Game orchestration across players and rounds.
//!
//! Every round gives each player, in registration order, one full turn over
//! the bank with fresh starting money. After the last player the standings
//! are printed and the players are asked whether to play again.

use crate::bank::QuestionBank;
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::Result;
use crate::question::PASS_KEYWORD;
use crate::scoring::CURRENCY;
use crate::turn::{TurnEngine, TurnSummary};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// A registered player. Money lives in each turn, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

/// One player's result for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    pub player: String,
    pub summary: TurnSummary,
}

/// Welcome text shown before anything is asked.
pub fn greeting(config: &GameConfig) -> String {
    format!(
        "Welcome to the quiz!\n\
         You start with {}{}. Each correct answer doubles your money, each wrong answer halves it.\n\
         A wrong answer asks the same question again. Type '{}' to skip a question.",
        CURRENCY, config.starting_money, PASS_KEYWORD
    )
}

/// Orders `results` by final money, highest first. Ties keep turn order.
pub fn standings(results: &[PlayerResult]) -> Vec<&PlayerResult> {
    let mut ranked: Vec<_> = results.iter().collect();
    ranked.sort_by(|a, b| b.summary.final_money.cmp(&a.summary.final_money));
    ranked
}

/// Runs turns for every player over a shared question bank.
pub struct Game<G> {
    bank: QuestionBank,
    config: GameConfig,
    rng: G,
}

impl<G: Rng> Game<G> {
    pub fn new(bank: QuestionBank, config: GameConfig, rng: G) -> Self {
        Game { bank, config, rng }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Asks for `config.players` non-empty names.
    pub fn register_players<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<Player>> {
        let mut players = Vec::with_capacity(self.config.players);
        for seat in 1..=self.config.players {
            let name = console.ask_non_empty(
                &format!("Enter name for Player {}: ", seat),
                "Player name cannot be empty. Try again.",
            )?;
            players.push(Player { name });
        }
        Ok(players)
    }

    /// Plays one turn for each player in order.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        players: &[Player],
    ) -> Result<Vec<PlayerResult>> {
        let mut results = Vec::with_capacity(players.len());

        for player in players {
            console.say(&format!("It is {}'s turn.", player.name))?;

            let summary = TurnEngine::start(&mut self.bank, self.config.starting_money)?
                .play(console, &mut self.rng)?;

            console.say(&format!(
                "{} finished with {}{}",
                player.name, CURRENCY, summary.final_money
            ))?;
            console.blank_line()?;
            info!("{} finished the turn with {}", player.name, summary.final_money);

            results.push(PlayerResult {
                player: player.name.clone(),
                summary,
            });
        }

        Ok(results)
    }

    /// Registers players and plays rounds until they decline another.
    ///
    /// Returns the results of every round in order.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<Vec<PlayerResult>>> {
        let players = self.register_players(console)?;
        let mut rounds = Vec::new();

        loop {
            let results = self.play_round(console, &players)?;
            print_standings(console, rounds.len() + 1, &results)?;
            rounds.push(results);

            if !console.ask_yes_no("Do you want to play another round? (yes/no): ")? {
                break;
            }
        }

        console.say("Thanks for playing!")?;
        Ok(rounds)
    }
}

fn print_standings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    round: usize,
    results: &[PlayerResult],
) -> Result<()> {
    console.say(&format!("Round {} standings:", round))?;
    for (place, result) in standings(results).into_iter().enumerate() {
        console.say(&format!(
            "  {}. {} - {}{} ({} correct, {} wrong, {} passed)",
            place + 1,
            result.player,
            CURRENCY,
            result.summary.final_money,
            result.summary.correct,
            result.summary.wrong,
            result.summary.passes
        ))?;
    }
    console.blank_line()
}
