//! The round loop: rank candidates, obtain a guess and hint, filter.

use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::constraint::Constraint;
use crate::entropy::EntropyPool;
use crate::hint::WordHint;
use crate::player::{OraclePlayer, Player};

/// Fatal errors raised by the game loop.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Every candidate was eliminated. The observed hints contradict each
    /// other, a guess or hint was mistyped, or the answer is not in the
    /// dictionary. No further round is possible.
    #[error("no candidate words remain after guess {guess:?} received hint {hint}; \
             check that the guess and hint were entered correctly")]
    ExhaustedDictionary { guess: String, hint: WordHint },
}

/// Rank every word in `dictionary` by entropy against that same dictionary
/// and return the best one with its score.
///
/// The strictly-greatest entropy wins; ties go to the earliest word in
/// dictionary order, so the result is deterministic. Returns `None` only for
/// an empty dictionary.
pub fn best_guess(pool: &mut EntropyPool, dictionary: &Arc<Vec<String>>) -> Option<(String, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, word) in dictionary.iter().enumerate() {
        let entropy = pool.entropy(word, dictionary);
        if best.map_or(true, |(_, best_entropy)| entropy > best_entropy) {
            best = Some((index, entropy));
        }
    }

    best.map(|(index, entropy)| (dictionary[index].clone(), entropy))
}

/// A memoized first-round ranking.
///
/// The first round always ranks the same full dictionary, which is also the
/// most expensive ranking of the game, so it can be computed once and shared
/// across games. The memo is tied to the exact dictionary it was derived
/// from: [`Game`] reuses it only when the game's first-round dictionary is
/// the same `Arc`, and recomputes otherwise.
#[derive(Debug, Clone)]
pub struct OpeningGuess {
    dictionary: Arc<Vec<String>>,
    pub word: String,
    pub entropy: f64,
}

impl OpeningGuess {
    /// Rank `dictionary` once and remember the winner.
    pub fn compute(pool: &mut EntropyPool, dictionary: &Arc<Vec<String>>) -> Option<Self> {
        best_guess(pool, dictionary).map(|(word, entropy)| Self {
            dictionary: Arc::clone(dictionary),
            word,
            entropy,
        })
    }

    fn matches(&self, dictionary: &Arc<Vec<String>>) -> bool {
        Arc::ptr_eq(&self.dictionary, dictionary)
    }
}

/// One game of Wordle: a live dictionary, a player, and the entropy pool
/// used to rank guesses.
///
/// The dictionary shrinks each round and is never otherwise mutated; workers
/// receive it as an immutable `Arc` snapshot.
pub struct Game<'a> {
    pool: &'a mut EntropyPool,
    dictionary: Arc<Vec<String>>,
    player: Box<dyn Player + 'a>,
    opening: Option<OpeningGuess>,
    verbose: bool,
}

impl<'a> Game<'a> {
    /// Create a game with the given player.
    ///
    /// # Panics
    ///
    /// Panics if `dictionary` is empty.
    pub fn new(
        pool: &'a mut EntropyPool,
        dictionary: Arc<Vec<String>>,
        player: Box<dyn Player + 'a>,
    ) -> Self {
        assert!(!dictionary.is_empty(), "dictionary must not be empty");
        Self {
            pool,
            dictionary,
            player,
            opening: None,
            verbose: false,
        }
    }

    /// Create a game where the answer is already known and hints are derived
    /// from it. The suggestion is always followed.
    pub fn with_answer(pool: &'a mut EntropyPool, dictionary: Arc<Vec<String>>, answer: &str) -> Self {
        Self::new(pool, dictionary, Box::new(OraclePlayer::new(answer)))
    }

    /// Print per-round progress while playing.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reuse a memoized first-round ranking. It is only honored if it was
    /// computed from this game's dictionary.
    pub fn opening(mut self, opening: OpeningGuess) -> Self {
        self.opening = Some(opening);
        self
    }

    /// Play until one candidate remains.
    ///
    /// Each round the best guess is suggested, the player supplies the
    /// actual guess and its hint, and the dictionary is filtered down to the
    /// candidates consistent with that hint. Returns the answer and the
    /// number of guesses used; a dictionary of size one is itself the answer
    /// and counts as the single remaining guess.
    pub fn play(mut self) -> Result<(String, u32), SolveError> {
        let mut guess_count: u32 = 1;

        while self.dictionary.len() != 1 {
            let (suggestion, expected) = self.suggest(guess_count == 1);
            if self.verbose {
                println!("(guess #{guess_count}) best guess: {suggestion} (expected entropy: {expected:.4})");
            }

            let guess = self.player.guess(&suggestion);
            let hint = self.player.hint(&guess);

            let previous_size = self.dictionary.len();
            let remaining = Constraint::new(&guess, hint).filter(&self.dictionary);
            if remaining.is_empty() {
                return Err(SolveError::ExhaustedDictionary { guess, hint });
            }

            if self.verbose {
                let realized = (previous_size as f64 / remaining.len() as f64).log2();
                println!(
                    "(guess #{guess_count}) {guess} -> {hint}: {previous_size} -> {} candidates (entropy: {realized:.4})",
                    remaining.len()
                );
            }

            self.dictionary = Arc::new(remaining);
            guess_count += 1;
        }

        let answer = self.dictionary[0].clone();
        if self.verbose {
            println!("answer: {answer} ({guess_count} guesses)");
        }
        Ok((answer, guess_count))
    }

    fn suggest(&mut self, first_round: bool) -> (String, f64) {
        if first_round {
            if let Some(opening) = &self.opening {
                if opening.matches(&self.dictionary) {
                    return (opening.word.clone(), opening.entropy);
                }
            }
        }

        match best_guess(self.pool, &self.dictionary) {
            Some(best) => best,
            // The constructor rejects an empty dictionary and the loop
            // aborts before a filter can empty it.
            None => unreachable!("dictionary is never empty during play"),
        }
    }
}

/// Solve every dictionary word as the hidden answer and tally how many games
/// needed each guess count.
///
/// The opening ranking is computed once and shared; after that each rayon
/// task plays its games on its own single-worker pool, so results stay
/// identical to a sequential run.
pub fn guess_distribution(dictionary: &Arc<Vec<String>>) -> Result<Vec<(u32, usize)>, SolveError> {
    let opening = {
        let mut pool = EntropyPool::with_default_workers();
        OpeningGuess::compute(&mut pool, dictionary)
    };

    let counts: Vec<u32> = dictionary
        .par_iter()
        .map_init(
            || EntropyPool::new(1),
            |pool, answer| {
                let mut game = Game::with_answer(pool, Arc::clone(dictionary), answer);
                if let Some(opening) = &opening {
                    game = game.opening(opening.clone());
                }
                game.play().map(|(_, count)| count)
            },
        )
        .collect::<Result<_, _>>()?;

    let max = counts.iter().copied().max().unwrap_or(0);
    let mut tally = vec![0usize; max as usize + 1];
    for count in counts {
        tally[count as usize] += 1;
    }

    Ok(tally
        .into_iter()
        .enumerate()
        .filter(|(_, games)| *games > 0)
        .map(|(guesses, games)| (guesses as u32, games))
        .collect())
}
