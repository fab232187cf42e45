//! Constraints derived from observed hints.
//!
//! A constraint pairs a guessed word with the hint it received. Candidate
//! words can be tested against it: a candidate is still viable only if, had
//! it been the answer, the guess would have produced exactly the observed
//! hint.

use crate::hint::WordHint;

/// A (guess, hint) pair used as a predicate over candidate words.
#[derive(Debug, Clone, Copy)]
pub struct Constraint<'a> {
    word: &'a str,
    hint: WordHint,
}

impl<'a> Constraint<'a> {
    pub fn new(word: &'a str, hint: WordHint) -> Self {
        Self { word, hint }
    }

    /// Whether `candidate` could be the answer given this constraint.
    pub fn satisfies(&self, candidate: &str) -> bool {
        WordHint::calculate(self.word, candidate) == self.hint
    }

    /// The subset of `dictionary` satisfying this constraint, in the original
    /// relative order.
    pub fn filter(&self, dictionary: &[String]) -> Vec<String> {
        dictionary
            .iter()
            .filter(|word| self.satisfies(word))
            .cloned()
            .collect()
    }

    /// The size of the subset of `dictionary` satisfying this constraint.
    ///
    /// Equivalent to `filter(dictionary).len()` without allocating; this is
    /// the entropy inner loop.
    pub fn filter_count(&self, dictionary: &[String]) -> usize {
        dictionary.iter().filter(|word| self.satisfies(word)).count()
    }
}
