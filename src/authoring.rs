//! Interactive authoring of a new question set.

use crate::bank::QuestionBank;
use crate::console::Console;
use crate::error::Result;
use crate::question::{is_pass_keyword, QuestionRecord, PASS_KEYWORD};
use log::info;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

/// Asks how many questions to write, collects each question and answer,
/// saves them to `path` and returns the new bank.
///
/// `path` is created before the first prompt, so an unwritable location
/// fails before anything is typed. Empty text is re-prompted, as is a
/// question containing a comma (it would split on reload) and an answer
/// equal to the pass keyword (nobody could ever answer it).
pub fn author_question_set<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<QuestionBank> {
    let file = File::create(path)?;

    let count = console.ask_count("How many questions? ")?;
    let mut records = Vec::with_capacity(count);

    for number in 1..=count {
        let question = ask_question(console, number)?;
        let answer = ask_answer(console, number)?;
        records.push(QuestionRecord::new(&question, &answer)?);
    }

    let bank = QuestionBank::new(records)?;
    bank.write_to(file)?;
    info!("Saved {} questions to {}", bank.len(), path.display());

    console.say(&format!("Question set saved to {}", path.display()))?;
    console.blank_line()?;
    Ok(bank)
}

fn ask_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    number: usize,
) -> Result<String> {
    let prompt = format!("Enter question {}: ", number);
    loop {
        let question = console.ask_non_empty(&prompt, "Question cannot be empty. Try again.")?;
        if !question.contains(',') {
            return Ok(question);
        }
        console.say("Questions cannot contain commas. Try again.")?;
    }
}

fn ask_answer<R: BufRead, W: Write>(console: &mut Console<R, W>, number: usize) -> Result<String> {
    let prompt = format!("Enter answer {}: ", number);
    loop {
        let answer = console.ask_non_empty(&prompt, "Answer cannot be empty. Try again.")?;
        if !is_pass_keyword(&answer) {
            return Ok(answer);
        }
        console.say(&format!(
            "'{}' is reserved for skipping questions. Try again.",
            PASS_KEYWORD
        ))?;
    }
}
