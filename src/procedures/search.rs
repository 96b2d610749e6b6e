/*!
Searching for problems.

A problem is found by a bounded generate-and-filter loop:

```rust,ignore
for attempt in 1..=max_attempts {
    let premises = /* between premise_count_min and premise_count_max random formulas */;
    let conclusion = /* a random formula */;
    match engine.validate(&problem)? {
        Ok(()) => return Ok(problem),
        Err(rejection) => continue,
    }
}
// error, with the last rejection
```

Rejections are not errors, and the loop fails only when every attempt is rejected, or when some check could not be decided.

# Batches

[generate_batch] finds a sequence of problems, identified `entailment_001`, `entailment_002`, and so on.

Each problem is found with a generator seeded from the seed of the batch and the index of the problem, so a batch depends only on the configuration and the seed.
In particular, a batch is the same regardless of the number of workers used to find the problems of the batch.

```rust
# use tfl_entail::config::Config;
# use tfl_entail::procedures::{entailment::Engine, search::generate_batch};
let engine = Engine::default();
let mut config = Config::default();
config.max_attempts.set(10_000).unwrap();

let problems = generate_batch(&engine, &config, 3, 2024).unwrap();
assert_eq!(problems.len(), 3);
assert_eq!(problems[2].id, "entailment_003");

config.workers.set(2).unwrap();
assert_eq!(generate_batch(&engine, &config, 3, 2024).unwrap(), problems);
```
*/

use crossbeam::channel::unbounded;
use rand::Rng;

use crate::{
    config::Config,
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    oracle::SatOracle,
    procedures::{
        entailment::{Engine, Rejection},
        generate::random_formula,
    },
    structures::problem::Problem,
    types::err::{self, ErrorKind},
};

/// A single generate-and-filter attempt.
///
/// Returns the problem generated if accepted, and otherwise the reason for rejection.
pub fn attempt<O: SatOracle, R: Rng + ?Sized>(
    engine: &Engine<O>,
    config: &Config,
    rng: &mut R,
    id: &str,
) -> Result<Result<Problem, Rejection>, ErrorKind> {
    let (min, max) = (config.premise_count_min.value, config.premise_count_max.value);
    if min > max {
        return Err(err::ConfigError::OutOfBounds {
            name: config.premise_count_min.name,
            min: config.premise_count_min.min.to_string(),
            max: max.to_string(),
            value: min.to_string(),
        }
        .into());
    }

    let depth = config.max_depth.value;
    let early_termination = config.early_termination.value;
    let premise_count = rng.random_range(min..=max);

    let mut formula = || {
        random_formula(
            &mut *rng,
            depth,
            &config.alphabet,
            &config.palette,
            early_termination,
        )
    };
    let premises = (0..premise_count).map(|_| formula()).collect();
    let conclusion = formula();

    let problem = Problem {
        id: id.to_string(),
        premises,
        conclusion,
        depth,
    };

    Ok(engine.validate(&problem)?.map(|()| problem))
}

/// Attempts to find a problem, up to the configured number of attempts.
pub fn generate_problem<O: SatOracle, R: Rng + ?Sized>(
    engine: &Engine<O>,
    config: &Config,
    rng: &mut R,
    id: &str,
) -> Result<Problem, ErrorKind> {
    let max_attempts = config.max_attempts.value.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt(engine, config, rng, id)? {
            Ok(problem) => {
                log::info!(target: targets::GENERATION, "Found {id} after {attempts} attempts");
                return Ok(problem);
            }

            Err(last) if attempts >= max_attempts => {
                log::info!(target: targets::GENERATION, "Gave up on {id} after {attempts} attempts");
                return Err(err::GenerationError::AttemptsExhausted { attempts, last }.into());
            }

            Err(rejection) => {
                log::trace!(target: targets::GENERATION, "Attempt {attempts} for {id} rejected: {rejection}");
            }
        }
    }
}

/// The identifier of the problem at some (zero-based) index of a batch.
pub fn problem_id(index: usize) -> String {
    format!("entailment_{:03}", index + 1)
}

/// The generator for the problem at some index of a batch.
pub fn problem_rng(seed: u64, index: usize) -> MinimalPCG32 {
    // Indices are spread by the golden ratio.
    MinimalPCG32::from_u64(seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Finds `count` problems, using the configured number of workers.
///
/// If some problem could not be found, the error for the problem with least index is returned.
pub fn generate_batch<O: SatOracle + Sync>(
    engine: &Engine<O>,
    config: &Config,
    count: usize,
    seed: u64,
) -> Result<Vec<Problem>, ErrorKind> {
    let workers = config.workers.value.clamp(1, count.max(1));
    log::info!(target: targets::GENERATION, "Generating {count} problems with seed {seed} on {workers} workers");

    let find = |index: usize| {
        let mut rng = problem_rng(seed, index);
        generate_problem(engine, config, &mut rng, &problem_id(index))
    };

    if workers == 1 {
        return (0..count).map(find).collect();
    }

    let (index_tx, index_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, Result<Problem, ErrorKind>)>();
    for index in 0..count {
        let _ = index_tx.send(index);
    }
    drop(index_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let index_rx = index_rx.clone();
            let result_tx = result_tx.clone();
            let find = &find;
            scope.spawn(move || {
                for index in index_rx.iter() {
                    if result_tx.send((index, find(index))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut results = result_rx.iter().collect::<Vec<_>>();
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::config::Palette;

    #[test]
    fn ids() {
        assert_eq!(problem_id(0), "entailment_001");
        assert_eq!(problem_id(41), "entailment_042");
        assert_eq!(problem_id(1233), "entailment_1234");
    }

    #[test]
    fn accepted_problems_are_valid() {
        let engine = Engine::default();
        let mut config = Config::default();
        config.max_attempts.set(10_000).unwrap();

        let mut rng = MinimalPCG32::from_u64(11);
        for index in 0..5 {
            let problem = generate_problem(&engine, &config, &mut rng, &problem_id(index)).unwrap();
            assert!((2..=3).contains(&problem.premise_count()));
            assert_eq!(engine.validate(&problem), Ok(Ok(())));
            assert_eq!(problem.to_record().difficulty.length, problem.premise_count() + 1);
            assert_eq!(problem.depth, 2);
        }
    }

    #[test]
    fn exhausted() {
        // Atoms alone never form a problem with two distinct premises and a non-trivial conclusion which is entailed.
        let engine = Engine::default();
        let mut config = Config::default();
        config.max_depth.set(0).unwrap();
        config.max_attempts.set(25).unwrap();

        let mut rng = MinimalPCG32::from_u64(12);
        match generate_problem(&engine, &config, &mut rng, "test") {
            Err(ErrorKind::Generation(err::GenerationError::AttemptsExhausted { attempts, .. })) => {
                assert_eq!(attempts, 25)
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn premise_counts() {
        let engine = Engine::default();
        let mut config = Config::default();
        config.set_premise_counts(1, 1).unwrap();
        config.palette = Palette::basic();

        let mut rng = MinimalPCG32::from_u64(13);
        for _ in 0..50 {
            if let Ok(Ok(problem)) = attempt(&engine, &config, &mut rng, "test") {
                assert_eq!(problem.premise_count(), 1);
            }
        }
    }

    #[test]
    fn batches_are_independent_of_workers() {
        let engine = Engine::default();
        let mut config = Config::default();
        config.max_attempts.set(10_000).unwrap();

        let sequential = generate_batch(&engine, &config, 6, 99).unwrap();
        config.workers.set(4).unwrap();
        let parallel = generate_batch(&engine, &config, 6, 99).unwrap();

        assert_eq!(sequential, parallel);
        let ids = parallel.iter().map(|problem| problem.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [
                "entailment_001",
                "entailment_002",
                "entailment_003",
                "entailment_004",
                "entailment_005",
                "entailment_006"
            ]
        );
    }

    #[test]
    fn empty_batch() {
        let engine = Engine::default();
        let config = Config::default();
        assert_eq!(generate_batch(&engine, &config, 0, 1), Ok(Vec::default()));
    }
}
