//! The question bank: loading, saving and drawing questions.
//!
//! A bank is built once per session and reused for every player and every
//! round. Between turns only the "used" state is cleared; the records
//! themselves never change after load.

use crate::error::{QuizError, Result};
use crate::question::QuestionRecord;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info, warn};
use rand::Rng;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// An ordered, fixed-size collection of questions.
///
/// Draws come from an explicit pool of remaining indices, so each draw is
/// uniform over the questions not yet asked this turn and a full turn of
/// `len()` draws visits every question exactly once.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,

    /// Indices of records not yet drawn in the current turn.
    remaining: Vec<usize>,
}

impl QuestionBank {
    /// Creates a bank from records. Fails with `EmptyBank` if there are none.
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        for record in records.iter().filter(|r| r.is_unanswerable()) {
            warn!(
                "Question {:?} can only be passed: its answer is the pass keyword",
                record.question()
            );
        }

        let mut bank = QuestionBank {
            remaining: Vec::with_capacity(records.len()),
            records,
        };
        bank.reset();
        Ok(bank)
    }

    /// Opens and parses a question file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let bank = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Parses `question,answer` lines from any reader.
    ///
    /// The format is plain text with no escaping: quote characters are kept
    /// as written. Blank lines are skipped. A non-empty line missing either
    /// field aborts the whole load with `MalformedLine`. Extra commas belong
    /// to the answer.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result?;
            if let Some(record) = parse_row(&row)? {
                records.push(record);
            }
        }

        Self::new(records)
    }

    /// Parses in-memory lines with the same rules as [`from_reader`](Self::from_reader).
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_reader(text.as_bytes())
    }

    /// Writes one `question,answer` line per record, in bank order.
    ///
    /// Text is written as-is. A comma inside a question splits it on reload,
    /// so authoring refuses such questions; commas in answers read back intact.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(writer);

        for record in &self.records {
            csv_writer.serialize(record.as_row())?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Creates or truncates `path` and writes the bank to it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(file)?;
        info!("Saved {} questions to {}", self.len(), path.display());
        Ok(())
    }

    /// Number of questions, which is also the number of rounds per turn.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of questions not yet drawn this turn.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.records.iter()
    }

    /// Returns whether the record at `index` was drawn this turn.
    pub fn is_used(&self, index: usize) -> bool {
        self.records.get(index).map(|r| r.is_used()).unwrap_or(false)
    }

    /// Marks every question unused and refills the draw pool. Idempotent.
    pub fn reset(&mut self) {
        for record in &mut self.records {
            record.set_used(false);
        }
        self.remaining.clear();
        self.remaining.extend(0..self.records.len());
    }

    /// Draws a question not yet used this turn, marks it used and returns its index.
    ///
    /// Every unused question is equally likely. Fails with `BankExhausted`
    /// once the turn has used every question.
    pub fn draw_random_unused<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<usize> {
        if self.remaining.is_empty() {
            return Err(QuizError::BankExhausted);
        }

        let slot = rng.gen_range(0..self.remaining.len());
        let index = self.remaining.swap_remove(slot);
        self.records[index].set_used(true);

        debug!(
            "Drew question {} ({} left this turn)",
            index,
            self.remaining.len()
        );
        Ok(index)
    }
}

/// Turns one delimited row into a record. `None` for blank lines.
///
/// Fields are re-joined untrimmed so spacing after commas inside the answer
/// survives; the record trims both ends.
fn parse_row(row: &StringRecord) -> Result<Option<QuestionRecord>> {
    if row.iter().all(|field| field.trim().is_empty()) {
        return Ok(None);
    }

    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let malformed = || QuizError::MalformedLine {
        line,
        content: row.iter().collect::<Vec<_>>().join(","),
    };

    let question = row.get(0).unwrap_or_default();
    let answer = row.iter().skip(1).collect::<Vec<_>>().join(",");
    if row.len() < 2 || question.trim().is_empty() || answer.trim().is_empty() {
        return Err(malformed());
    }

    QuestionRecord::new(question, &answer)
        .map(Some)
        .map_err(|_| malformed())
}
