//! Money rules.
//!
//! A correct answer doubles the player's money and a wrong one halves it
//! with integer division. There is no floor: small amounts halve down to 0
//! and stay there.

/// Currency symbol used in every money message.
pub const CURRENCY: &str = "£";

/// Applies the doubling/halving rule.
///
/// Halving truncates toward zero. Doubling saturates at the `i64` bounds
/// instead of wrapping.
pub fn update_money(correct: bool, money: i64) -> i64 {
    if correct {
        money.saturating_mul(2)
    } else {
        money / 2
    }
}

/// Message shown after every non-pass attempt: correctness, money before,
/// money after.
pub fn result_message(correct: bool, before: i64, after: i64) -> String {
    format!(
        "Correct? {}. You had {}{}, now you have {}{}.",
        correct, CURRENCY, before, CURRENCY, after
    )
}
