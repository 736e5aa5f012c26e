//! Error types for the quiz game.

use thiserror::Error;

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can end a quiz session.
///
/// Invalid console input (an empty name, an empty answer, anything other
/// than yes/no) is never reported here: the [`Console`](crate::Console)
/// re-prompts until it gets something usable.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Failed to open, read or write a file or the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text error from the question file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Non-empty line that does not hold both a question and an answer
    #[error("Malformed question at line {line}: expected `question,answer`, found {content:?}")]
    MalformedLine { line: u64, content: String },

    /// No questions were loaded
    #[error("The question set is empty; add at least one `question,answer` line")]
    EmptyBank,

    /// Question or answer text rejected at construction
    #[error("Invalid question: {message}")]
    InvalidRecord { message: String },

    /// Every question of the current turn has already been drawn
    #[error("No unused questions left in this turn")]
    BankExhausted,

    /// Response given for a question that is not in the bank
    #[error("Unknown question index {index}")]
    UnknownQuestion { index: usize },

    /// Console input ended while a prompt was waiting for an answer
    #[error("Input closed before the game finished")]
    InputClosed,

    /// Session parameters that cannot run a game
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
