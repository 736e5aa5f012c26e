//! One player's turn through the whole question bank.
//!
//! A turn runs exactly `bank.len()` rounds. Each round draws a question the
//! player has not seen this turn and then loops on the answer protocol:
//!
//! - `PASS` (any case) ends the round with no change in money
//! - a correct answer doubles the money and ends the round
//! - a wrong answer halves the money and asks the same question again

use crate::bank::QuestionBank;
use crate::console::Console;
use crate::error::{QuizError, Result};
use crate::question::is_pass_keyword;
use crate::scoring::{result_message, update_money};
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};

/// What the player typed for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Skip the question.
    Pass,

    /// Attempt an answer.
    Answer(String),
}

impl Response {
    pub fn parse(input: &str) -> Self {
        if is_pass_keyword(input) {
            Response::Pass
        } else {
            Response::Answer(input.trim().to_string())
        }
    }
}

/// Where a round stands after a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Same question is asked again.
    AwaitingInput,

    /// Move on to the next draw, or end the turn.
    RoundComplete,
}

/// Outcome of one answer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub correct: bool,
    pub money_before: i64,
    pub money_after: i64,
}

impl Attempt {
    pub fn message(&self) -> String {
        result_message(self.correct, self.money_before, self.money_after)
    }
}

/// Totals for a finished turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnSummary {
    pub starting_money: i64,
    pub final_money: i64,
    pub rounds: usize,
    pub correct: u32,
    pub wrong: u32,
    pub passes: u32,
}

/// Drives a single turn against a borrowed bank.
///
/// The bank is reset when the engine starts, so the bank's used flags always
/// describe the current turn only.
pub struct TurnEngine<'a> {
    bank: &'a mut QuestionBank,
    summary: TurnSummary,
}

impl<'a> TurnEngine<'a> {
    /// Resets the bank and starts a turn with `starting_money`.
    ///
    /// Fails with `EmptyBank` before anything is asked if the bank has no
    /// questions. `QuestionBank::new` already refuses empty banks, so this
    /// only fires if that check is ever relaxed.
    pub fn start(bank: &'a mut QuestionBank, starting_money: i64) -> Result<Self> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        bank.reset();

        Ok(TurnEngine {
            bank,
            summary: TurnSummary {
                starting_money,
                final_money: starting_money,
                ..TurnSummary::default()
            },
        })
    }

    pub fn money(&self) -> i64 {
        self.summary.final_money
    }

    /// `true` once every question in the bank has been drawn this turn.
    pub fn is_finished(&self) -> bool {
        self.summary.rounds >= self.bank.len()
    }

    /// Starts the next round by drawing an unused question.
    pub fn draw<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<usize> {
        let index = self.bank.draw_random_unused(rng)?;
        self.summary.rounds += 1;
        Ok(index)
    }

    /// Applies one response to the question at `index`.
    ///
    /// Returns the new round state and, for answers, the scored attempt.
    pub fn respond(
        &mut self,
        index: usize,
        response: &Response,
    ) -> Result<(RoundState, Option<Attempt>)> {
        let record = self
            .bank
            .get(index)
            .ok_or(QuizError::UnknownQuestion { index })?;

        let answer = match response {
            Response::Pass => {
                self.summary.passes += 1;
                debug!("Question {} passed", index);
                return Ok((RoundState::RoundComplete, None));
            }
            Response::Answer(answer) => answer,
        };

        let correct = record.accepts(answer);
        let money_before = self.summary.final_money;
        let money_after = update_money(correct, money_before);
        self.summary.final_money = money_after;

        let state = if correct {
            self.summary.correct += 1;
            RoundState::RoundComplete
        } else {
            self.summary.wrong += 1;
            RoundState::AwaitingInput
        };
        debug!(
            "Question {}: correct={} money {} -> {}",
            index, correct, money_before, money_after
        );

        Ok((
            state,
            Some(Attempt {
                correct,
                money_before,
                money_after,
            }),
        ))
    }

    /// Plays every round over the console and returns the turn totals.
    pub fn play<R, W, G>(mut self, console: &mut Console<R, W>, rng: &mut G) -> Result<TurnSummary>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        info!(
            "Turn started with {} questions and {} money",
            self.bank.len(),
            self.summary.starting_money
        );

        while !self.is_finished() {
            let index = self.draw(rng)?;
            self.play_round(console, index)?;
        }

        info!("Turn finished with {} money", self.summary.final_money);
        Ok(self.summary)
    }

    fn play_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        index: usize,
    ) -> Result<()> {
        let question = self
            .bank
            .get(index)
            .ok_or(QuizError::UnknownQuestion { index })?
            .question()
            .to_string();
        let prompt = format!(
            "Question {} of {}: {} ",
            self.summary.rounds,
            self.bank.len(),
            question
        );

        loop {
            let input = console.ask_non_empty(&prompt, "Answer cannot be empty. Try again.")?;
            let (state, attempt) = self.respond(index, &Response::parse(&input))?;

            match attempt {
                Some(attempt) => console.say(&attempt.message())?,
                None => console.say("Next question.")?,
            }
            console.blank_line()?;

            if state == RoundState::RoundComplete {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn single_question_bank() -> QuestionBank {
        QuestionBank::from_lines(["2+2?,4"]).unwrap()
    }

    #[test]
    fn test_parse_response() {
        assert_eq!(Response::parse("pass"), Response::Pass);
        assert_eq!(Response::parse(" PASS "), Response::Pass);
        assert_eq!(
            Response::parse(" Paris "),
            Response::Answer("Paris".to_string())
        );
    }

    #[test]
    fn test_correct_answer_completes_round_and_doubles() {
        let mut bank = single_question_bank();
        let mut engine = TurnEngine::start(&mut bank, 500).unwrap();

        let (state, attempt) = engine
            .respond(0, &Response::Answer("4".to_string()))
            .unwrap();
        assert_eq!(state, RoundState::RoundComplete);
        assert_eq!(
            attempt,
            Some(Attempt {
                correct: true,
                money_before: 500,
                money_after: 1000
            })
        );
        assert_eq!(engine.money(), 1000);
    }

    #[test]
    fn test_wrong_answer_keeps_round_open_and_halves() {
        let mut bank = single_question_bank();
        let mut engine = TurnEngine::start(&mut bank, 500).unwrap();

        let (state, attempt) = engine
            .respond(0, &Response::Answer("5".to_string()))
            .unwrap();
        assert_eq!(state, RoundState::AwaitingInput);
        assert_eq!(attempt.unwrap().money_after, 250);

        let (state, attempt) = engine.respond(0, &Response::Pass).unwrap();
        assert_eq!(state, RoundState::RoundComplete);
        assert!(attempt.is_none());
        assert_eq!(engine.money(), 250);
    }

    #[test]
    fn test_respond_to_unknown_question() {
        let mut bank = single_question_bank();
        let mut engine = TurnEngine::start(&mut bank, 500).unwrap();
        assert!(matches!(
            engine.respond(3, &Response::Pass).unwrap_err(),
            QuizError::UnknownQuestion { index: 3 }
        ));
    }

    #[test]
    fn test_start_resets_bank() {
        let mut bank = QuestionBank::from_lines(["a,1", "b,2"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        bank.draw_random_unused(&mut rng).unwrap();
        bank.draw_random_unused(&mut rng).unwrap();

        let engine = TurnEngine::start(&mut bank, 500).unwrap();
        assert!(!engine.is_finished());
        drop(engine);
        assert_eq!(bank.remaining(), 2);
    }

    #[test]
    fn test_play_retries_same_question_until_pass() {
        let mut bank = single_question_bank();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut console = Console::new(Cursor::new(b"5\n\n3\npass\n".to_vec()), Vec::new());

        let summary = TurnEngine::start(&mut bank, 500)
            .unwrap()
            .play(&mut console, &mut rng)
            .unwrap();

        assert_eq!(summary.final_money, 125);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.wrong, 2);
        assert_eq!(summary.passes, 1);
        assert_eq!(summary.correct, 0);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Question 1 of 1: 2+2? ").count(), 4);
        assert!(output.contains("Answer cannot be empty. Try again."));
        assert!(output.contains("Correct? false. You had £500, now you have £250."));
        assert!(output.contains("Correct? false. You had £250, now you have £125."));
        assert!(output.contains("Next question."));
    }
}
