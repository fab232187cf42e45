//! Entropy scoring on a persistent pool of worker threads.
//!
//! The entropy of a word measures the information its hint is expected to
//! reveal. Given a word x and dictionary d, an entropy of e means guessing x
//! will on average shrink d by a factor of 2^e.
//!
//! It is computed as the sum, over every possible hint, of the expected
//! information of that hint: the probability of seeing it (the fraction of
//! the dictionary consistent with it) times log2 of one over that
//! probability. Hints no remaining word could produce have probability 0 and
//! contribute nothing.
//!
//! Scoring one word touches the whole dictionary once per hint pattern, and
//! the 243 patterns are independent of each other, so the pattern space is
//! the parallel axis: it is split into contiguous shards at pool creation,
//! one per worker, and each worker keeps its shard for the life of the pool.
//! Entropy is additive, so each worker sums its shard's contributions and
//! the pool adds up the partials.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::constraint::Constraint;
use crate::hint::WordHint;

struct Job {
    word: String,
    dictionary: Arc<Vec<String>>,
}

/// A tagged partial sum from one worker.
struct Partial {
    worker: usize,
    entropy: f64,
}

/// A persistent pool of worker threads that scores one word at a time.
///
/// The pool is created once per run and reused across every round; workers
/// are never torn down between calls. [`EntropyPool::entropy`] takes
/// `&mut self` so only one job can ever be in flight, which is also what
/// lets the caller mutate the dictionary freely between calls.
pub struct EntropyPool {
    jobs: Vec<Sender<Job>>,
    results: Receiver<Partial>,
    handles: Vec<JoinHandle<()>>,
}

impl EntropyPool {
    /// Create a pool with the given number of workers.
    ///
    /// The 243 hint patterns are partitioned into `num_workers` contiguous
    /// shards of size ceil(243 / num_workers); the final shards may be
    /// truncated or empty when the worker count does not divide evenly.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    pub fn new(num_workers: usize) -> Self {
        assert!(num_workers > 0, "entropy pool needs at least one worker");

        let all_hints = WordHint::all();
        let shard_size = (WordHint::COUNT + num_workers - 1) / num_workers;

        let (result_tx, result_rx) = crossbeam_channel::bounded(num_workers);
        let mut jobs = Vec::with_capacity(num_workers);
        let mut handles = Vec::with_capacity(num_workers);

        for worker in 0..num_workers {
            let start = (worker * shard_size).min(WordHint::COUNT);
            let stop = ((worker + 1) * shard_size).min(WordHint::COUNT);
            let shard = all_hints[start..stop].to_vec();

            let (job_tx, job_rx) = crossbeam_channel::bounded::<Job>(1);
            let result_tx = result_tx.clone();
            jobs.push(job_tx);
            handles.push(thread::spawn(move || worker_loop(worker, shard, job_rx, result_tx)));
        }

        Self {
            jobs,
            results: result_rx,
            handles,
        }
    }

    /// Create a pool with one worker per available CPU.
    pub fn with_default_workers() -> Self {
        Self::new(num_cpus::get())
    }

    pub fn num_workers(&self) -> usize {
        self.jobs.len()
    }

    /// Score `word` against `dictionary`, blocking until every worker has
    /// reported its partial sum.
    ///
    /// The dictionary must be non-empty; the game loop aborts before an
    /// empty dictionary can reach the pool.
    ///
    /// Partials are collected into a buffer indexed by worker id and summed
    /// in worker order, never in arrival order. Floating-point addition is
    /// not associative, so summing as results happen to arrive would make
    /// the score depend on thread scheduling.
    pub fn entropy(&mut self, word: &str, dictionary: &Arc<Vec<String>>) -> f64 {
        for job_tx in &self.jobs {
            let job = Job {
                word: word.to_string(),
                dictionary: Arc::clone(dictionary),
            };
            job_tx.send(job).expect("entropy worker exited");
        }

        let mut partials = vec![0.0; self.jobs.len()];
        for _ in 0..self.jobs.len() {
            let partial = self.results.recv().expect("entropy worker exited");
            partials[partial.worker] = partial.entropy;
        }

        partials.iter().sum()
    }
}

impl Drop for EntropyPool {
    fn drop(&mut self) {
        // Closing the job channels ends the worker loops.
        self.jobs.clear();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

fn worker_loop(worker: usize, shard: Vec<WordHint>, jobs: Receiver<Job>, results: Sender<Partial>) {
    while let Ok(job) = jobs.recv() {
        let entropy = shard_entropy(&shard, &job.word, &job.dictionary);
        if results.send(Partial { worker, entropy }).is_err() {
            break;
        }
    }
}

/// Sum the entropy contributions of one shard of the hint space.
fn shard_entropy(shard: &[WordHint], word: &str, dictionary: &[String]) -> f64 {
    let dictionary_size = dictionary.len() as f64;
    let mut entropy = 0.0;

    for &hint in shard {
        let remaining = Constraint::new(word, hint).filter_count(dictionary);
        if remaining == 0 {
            continue;
        }

        let probability = remaining as f64 / dictionary_size;
        entropy += probability * (1.0 / probability).log2();
    }

    entropy
}
