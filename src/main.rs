//! Wordle Entropy CLI
//!
//! Command-line front end for the entropy solver. Argument handling, the
//! interactive player, and all terminal I/O live here; the solver core never
//! touches stdin or stdout except for optional progress lines.

use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use wordle_entropy::{
    best_guess, guess_distribution, load_dictionary, EntropyPool, Game, Player, WordHint,
    WORD_LENGTH,
};

const USAGE: &str = "\
wordle-entropy - an entropy-maximizing Wordle solver

USAGE:
    wordle-entropy            play interactively against a real Wordle
    wordle-entropy solve <word>
                              watch the solver find <word> on its own
    wordle-entropy suggest    print the best opening guess
    wordle-entropy bench      solve every dictionary word and tally guesses

Interactive prompts:
    guess    the word you played; empty input plays the suggestion, and a
             hint string (b/y/g) plays the suggestion with that hint
    hint     the colors Wordle showed, as five of b (gray), y (yellow),
             g (green), e.g. bygbb";

/// A player driven by a human relaying guesses and hints from a real game.
struct InteractivePlayer {
    pending_hint: Option<WordHint>,
}

impl InteractivePlayer {
    fn new() -> Self {
        Self { pending_hint: None }
    }
}

impl Player for InteractivePlayer {
    fn guess(&mut self, suggestion: &str) -> String {
        loop {
            let input = read_line("guess");

            if input.is_empty() {
                println!("playing the suggestion");
                return suggestion.to_string();
            }

            if input.len() != WORD_LENGTH {
                println!("bad guess: expected {WORD_LENGTH} letters, got {}", input.len());
                continue;
            }

            // A hint entered at the guess prompt means the suggestion was
            // played and this is its result.
            if let Ok(hint) = input.parse::<WordHint>() {
                self.pending_hint = Some(hint);
                println!("playing the suggestion");
                return suggestion.to_string();
            }

            if !valid_word(&input) {
                println!("bad guess: use lowercase letters a-z");
                continue;
            }

            return input;
        }
    }

    fn hint(&mut self, _guess: &str) -> WordHint {
        if let Some(hint) = self.pending_hint.take() {
            println!("hint: {hint} (entered with the guess)");
            return hint;
        }

        loop {
            match read_line("hint").parse() {
                Ok(hint) => return hint,
                Err(err) => println!("bad hint: {err}"),
            }
        }
    }
}

/// A playable word: exactly five bytes, all lowercase ASCII letters.
fn valid_word(input: &str) -> bool {
    input.len() == WORD_LENGTH && input.bytes().all(|b| b.is_ascii_lowercase())
}

fn read_line(prompt: &str) -> String {
    print!("{prompt}: ");
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).unwrap() == 0 {
        println!();
        process::exit(0);
    }
    line.trim().to_string()
}

fn run_interactive() {
    let dictionary = Arc::new(load_dictionary());
    println!("loaded {} words", dictionary.len());

    let mut pool = EntropyPool::with_default_workers();
    let game = Game::new(&mut pool, dictionary, Box::new(InteractivePlayer::new())).verbose(true);

    if let Err(err) = game.play() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run_solve(target: &str) {
    let target = target.to_lowercase();
    if !valid_word(&target) {
        eprintln!("word must be {WORD_LENGTH} lowercase letters a-z");
        process::exit(1);
    }

    let dictionary = Arc::new(load_dictionary());
    let mut pool = EntropyPool::with_default_workers();
    let game = Game::with_answer(&mut pool, dictionary, &target).verbose(true);

    match game.play() {
        Ok((answer, guesses)) => println!("solved: {answer} in {guesses} guesses"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run_suggest() {
    let dictionary = Arc::new(load_dictionary());
    let mut pool = EntropyPool::with_default_workers();

    match best_guess(&mut pool, &dictionary) {
        Some((word, entropy)) => {
            println!("best opening guess: {word}");
            println!("expected entropy: {entropy:.4} bits");
        }
        None => {
            eprintln!("dictionary is empty");
            process::exit(1);
        }
    }
}

fn run_bench() {
    let dictionary = Arc::new(load_dictionary());
    println!("solving all {} words...", dictionary.len());

    let start = std::time::Instant::now();
    let distribution = match guess_distribution(&dictionary) {
        Ok(distribution) => distribution,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let games: usize = distribution.iter().map(|(_, n)| n).sum();
    let total_guesses: usize = distribution
        .iter()
        .map(|(guesses, n)| *guesses as usize * n)
        .sum();

    for (guesses, n) in &distribution {
        println!("{guesses} guesses: {n} words");
    }
    println!("average: {:.3} guesses", total_guesses as f64 / games as f64);
    println!("elapsed: {elapsed:.2?}");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_interactive(),
        Some("--help" | "-h" | "help") => println!("{USAGE}"),
        Some("solve") => match args.get(2) {
            Some(target) => run_solve(target),
            None => {
                eprintln!("usage: wordle-entropy solve <word>");
                process::exit(1);
            }
        },
        Some("suggest") => run_suggest(),
        Some("bench") => run_bench(),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("use --help for usage");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_word_requires_five_lowercase_ascii_letters() {
        assert!(valid_word("crane"));

        assert!(!valid_word("cran"));
        assert!(!valid_word("cranes"));
        assert!(!valid_word("CRANE"));
        // Hint scoring indexes by letter, so anything outside a-z must be
        // rejected before it can reach the solver.
        assert!(!valid_word("ab!de"));
        assert!(!valid_word("ab1de"));
        // Four chars plus one two-byte letter is five bytes but not a word.
        assert!(!valid_word("abcé"));
    }
}
