use std::sync::Arc;

use wordle_entropy::{
    best_guess, guess_distribution, EntropyPool, Game, OpeningGuess, Player, SolveError, WordHint,
};

fn dict(words: &[&str]) -> Arc<Vec<String>> {
    Arc::new(words.iter().map(|w| w.to_string()).collect())
}

fn test_words() -> Arc<Vec<String>> {
    dict(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

/// A player that replays a fixed script of guesses and hints.
struct ScriptedPlayer {
    script: Vec<(String, WordHint)>,
}

impl ScriptedPlayer {
    fn new(script: &[(&str, &str)]) -> Self {
        Self {
            script: script
                .iter()
                .rev()
                .map(|(guess, hint)| (guess.to_string(), hint.parse().unwrap()))
                .collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn guess(&mut self, _suggestion: &str) -> String {
        self.script.last().expect("script ran out of guesses").0.clone()
    }

    fn hint(&mut self, _guess: &str) -> WordHint {
        self.script.pop().expect("script ran out of hints").1
    }
}

#[test]
fn test_singleton_dictionary_solves_immediately() {
    // An empty script panics on any call, so the single remaining word must
    // be reported without ranking a guess or consulting the player.
    let mut pool = EntropyPool::new(2);
    let player = ScriptedPlayer::new(&[]);
    let game = Game::new(&mut pool, dict(&["crane"]), Box::new(player));

    let (answer, guesses) = game.play().unwrap();
    assert_eq!(answer, "crane");
    assert_eq!(guesses, 1);
}

#[test]
fn test_oracle_game_finds_the_answer() {
    let mut pool = EntropyPool::new(4);
    let game = Game::with_answer(&mut pool, test_words(), "crate");

    let (answer, guesses) = game.play().unwrap();
    assert_eq!(answer, "crate");
    assert!(guesses <= 6, "took {guesses} guesses");
}

#[test]
fn test_oracle_game_solves_every_answer() {
    let dictionary = test_words();
    let mut pool = EntropyPool::new(4);

    for target in dictionary.iter() {
        let game = Game::with_answer(&mut pool, Arc::clone(&dictionary), target);
        let (answer, guesses) = game.play().unwrap();
        assert_eq!(&answer, target);
        assert!(guesses <= 6, "target {target} took {guesses} guesses");
    }
}

#[test]
fn test_contradictory_hints_are_fatal() {
    // An all-correct hint for a word that is not in the dictionary leaves
    // zero candidates.
    let mut pool = EntropyPool::new(2);
    let player = ScriptedPlayer::new(&[("crane", "ggggg")]);
    let game = Game::new(&mut pool, dict(&["slate", "toast"]), Box::new(player));

    match game.play() {
        Err(SolveError::ExhaustedDictionary { guess, hint }) => {
            assert_eq!(guess, "crane");
            assert_eq!(hint, WordHint::ALL_CORRECT);
        }
        other => panic!("expected ExhaustedDictionary, got {other:?}"),
    }
}

#[test]
fn test_best_guess_breaks_ties_by_dictionary_order() {
    // Both words score exactly one bit, so the first one must win.
    let dictionary = dict(&["shard", "share"]);
    let mut pool = EntropyPool::new(2);

    let (word, entropy) = best_guess(&mut pool, &dictionary).unwrap();
    assert_eq!(word, "shard");
    assert!((entropy - 1.0).abs() < 1e-12);
}

#[test]
fn test_best_guess_of_empty_dictionary_is_none() {
    let mut pool = EntropyPool::new(2);
    assert!(best_guess(&mut pool, &dict(&[])).is_none());
}

#[test]
fn test_opening_guess_matches_a_fresh_ranking() {
    let dictionary = test_words();
    let mut pool = EntropyPool::new(4);

    let opening = OpeningGuess::compute(&mut pool, &dictionary).unwrap();
    let (word, entropy) = best_guess(&mut pool, &dictionary).unwrap();
    assert_eq!(opening.word, word);
    assert_eq!(opening.entropy.to_bits(), entropy.to_bits());
}

#[test]
fn test_game_with_opening_memo_still_solves() {
    let dictionary = test_words();
    let mut pool = EntropyPool::new(4);
    let opening = OpeningGuess::compute(&mut pool, &dictionary).unwrap();

    let game = Game::with_answer(&mut pool, Arc::clone(&dictionary), "roast").opening(opening);
    let (answer, _) = game.play().unwrap();
    assert_eq!(answer, "roast");
}

#[test]
fn test_stale_opening_memo_is_ignored() {
    // The memo was derived from a different dictionary, so the game must
    // recompute instead of trusting it.
    let mut pool = EntropyPool::new(4);
    let other = dict(&["shard", "share"]);
    let opening = OpeningGuess::compute(&mut pool, &other).unwrap();

    let game = Game::with_answer(&mut pool, test_words(), "beast").opening(opening);
    let (answer, _) = game.play().unwrap();
    assert_eq!(answer, "beast");
}

#[test]
fn test_guess_distribution_covers_every_word() {
    let dictionary = dict(&["crane", "slate", "trace", "crate", "raise", "arise"]);
    let distribution = guess_distribution(&dictionary).unwrap();

    let games: usize = distribution.iter().map(|(_, n)| n).sum();
    assert_eq!(games, dictionary.len());
    for (guesses, _) in distribution {
        assert!(guesses >= 1);
    }
}
