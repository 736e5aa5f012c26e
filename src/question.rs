//! Question records and answer matching.

use crate::error::{QuizError, Result};
use serde::Serialize;

/// Keyword a player types to skip the current question.
pub const PASS_KEYWORD: &str = "PASS";

/// A single quiz item.
///
/// Fields are private: the bank is the only owner and the rest of the crate
/// goes through the accessors below.
///
/// # Invariants
///
/// - `question` and `answer` are trimmed and non-empty
/// - `used` is only meaningful within a single player's turn; the bank
///   clears it when a turn starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    question: String,
    answer: String,
    used: bool,
}

impl QuestionRecord {
    /// Creates an unused record from question and answer text.
    ///
    /// Both texts are trimmed. Returns `InvalidRecord` if either is empty.
    pub fn new(question: &str, answer: &str) -> Result<Self> {
        let question = question.trim();
        let answer = answer.trim();

        if question.is_empty() {
            return Err(QuizError::InvalidRecord {
                message: "question text is empty".to_string(),
            });
        }
        if answer.is_empty() {
            return Err(QuizError::InvalidRecord {
                message: format!("answer to {:?} is empty", question),
            });
        }

        Ok(QuestionRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            used: false,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns `true` once this record has been drawn in the current turn.
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn set_used(&mut self, used: bool) {
        self.used = used;
    }

    /// Checks a player's attempt against the stored answer, ignoring case
    /// and surrounding whitespace.
    pub fn accepts(&self, attempt: &str) -> bool {
        attempt.trim().to_lowercase() == self.answer.to_lowercase()
    }

    /// Returns `true` if the answer can never be given because typing it
    /// passes the question instead.
    pub fn is_unanswerable(&self) -> bool {
        is_pass_keyword(&self.answer)
    }

    pub(crate) fn as_row(&self) -> QuestionRow<'_> {
        QuestionRow {
            question: &self.question,
            answer: &self.answer,
        }
    }
}

/// Returns `true` if the input is the pass keyword in any case.
pub fn is_pass_keyword(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(PASS_KEYWORD)
}

/// On-disk shape of a question: one `question,answer` line.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unused_and_trimmed() {
        let record = QuestionRecord::new("  2+2?  ", " 4 ").unwrap();
        assert_eq!(record.question(), "2+2?");
        assert_eq!(record.answer(), "4");
        assert!(!record.is_used());
    }

    #[test]
    fn test_new_rejects_empty_question() {
        let err = QuestionRecord::new("   ", "4").unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { .. }));
    }

    #[test]
    fn test_new_rejects_empty_answer() {
        let err = QuestionRecord::new("2+2?", "").unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { .. }));
    }

    #[test]
    fn test_accepts_ignores_case_and_whitespace() {
        let record = QuestionRecord::new("Capital of France?", "Paris").unwrap();
        assert!(record.accepts("paris"));
        assert!(record.accepts("  PARIS "));
        assert!(!record.accepts("Lyon"));
        assert!(!record.accepts("Pari"));
    }

    #[test]
    fn test_accepts_non_ascii_answers() {
        let record = QuestionRecord::new("Largest German city?", "Berlin München").unwrap();
        assert!(record.accepts("berlin MÜNCHEN"));
    }

    #[test]
    fn test_used_flag_round_trip() {
        let mut record = QuestionRecord::new("q", "a").unwrap();
        record.set_used(true);
        assert!(record.is_used());
        record.set_used(false);
        assert!(!record.is_used());
    }

    #[test]
    fn test_pass_keyword_detection() {
        assert!(is_pass_keyword("PASS"));
        assert!(is_pass_keyword("pass"));
        assert!(is_pass_keyword(" Pass "));
        assert!(!is_pass_keyword("passport"));

        let record = QuestionRecord::new("Say the magic word", "pass").unwrap();
        assert!(record.is_unanswerable());
    }
}
