//! # Wordle Entropy
//!
//! A multithreaded Wordle solver that ranks guesses by expected information
//! gain (entropy).
//!
//! Each round, every word still consistent with the observed hints is scored
//! by how much it is expected to shrink the candidate set, and the
//! highest-entropy word is suggested. Scoring is spread across a persistent
//! pool of worker threads, each permanently owning a shard of the 3^5 hint
//! patterns; see [`EntropyPool`] for how the reduction stays deterministic.
//!
//! The solver works both when the answer is unknown (a human relays hints
//! from a real game) and when it is known (an [`OraclePlayer`] derives hints
//! itself, useful for testing and benchmarking).

pub mod constraint;
pub mod entropy;
pub mod game;
pub mod hint;
pub mod player;

pub use constraint::Constraint;
pub use entropy::EntropyPool;
pub use game::{best_guess, guess_distribution, Game, OpeningGuess, SolveError};
pub use hint::{HintParseError, LetterHint, WordHint};
pub use player::{OraclePlayer, Player};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<String> {
    include_str!("../dictionary/words.txt")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}
