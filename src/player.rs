//! Sources of guesses and hints.

use crate::hint::WordHint;

/// Supplies the guesses made each round and the hints they receive.
///
/// The solver suggests its best word; a player may follow the suggestion or
/// override it, and must then report the hint the chosen guess received.
pub trait Player {
    /// The guess to play this round, given the solver's suggestion.
    fn guess(&mut self, suggestion: &str) -> String;

    /// The hint received by `guess`.
    fn hint(&mut self, guess: &str) -> WordHint;
}

/// A player that knows the answer.
///
/// It always follows the suggestion and derives hints by scoring the guess
/// against the hidden answer. Useful for seeing how the solver reacts to a
/// chosen answer, and for benchmarks.
pub struct OraclePlayer {
    answer: String,
}

impl OraclePlayer {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
        }
    }
}

impl Player for OraclePlayer {
    fn guess(&mut self, suggestion: &str) -> String {
        suggestion.to_string()
    }

    fn hint(&mut self, guess: &str) -> WordHint {
        WordHint::calculate(guess, &self.answer)
    }
}
