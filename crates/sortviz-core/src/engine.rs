//! Engine entry points: validation, working copy, dispatch.

use crate::algorithm::Algorithm;
use crate::config::EngineConfig;
use crate::error::{SortError, SortResult};
use crate::trace::{Recorder, Trace};

/// Last step of every trace over two or more elements.
pub const FINAL_MESSAGE: &str = "Final sorted array.";

/// Sole step of a trace over zero or one element.
pub const TRIVIAL_MESSAGE: &str = "Array has fewer than two elements; already sorted.";

/// Runs sorts under an [`EngineConfig`]. Holds no per-call state, so one
/// engine can serve any number of callers concurrently.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses `algorithm` and runs it. Unknown selectors fail with
    /// [`SortError::InvalidAlgorithm`].
    pub fn run_named(&self, algorithm: &str, input: &[i64]) -> SortResult<Trace> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.run(algorithm, input)
    }

    /// Sorts a copy of `input` and returns the finished trace.
    pub fn run(&self, algorithm: Algorithm, input: &[i64]) -> SortResult<Trace> {
        self.check(algorithm, input)?;
        let sorter = algorithm.sorter();
        Ok(record_trace(input, |working, rec| sorter.sort(working, rec)))
    }

    /// Rejects input the algorithm cannot run on, without doing any work.
    pub fn check(&self, algorithm: Algorithm, input: &[i64]) -> SortResult<()> {
        let max = self.config.max_input_len;
        if input.len() > max {
            return Err(SortError::InputTooLarge {
                len: input.len(),
                max,
            });
        }
        if algorithm.requires_non_negative() {
            if let Some((index, value)) = input.iter().enumerate().find(|(_, v)| **v < 0) {
                return Err(SortError::invalid_input(
                    Some(index),
                    format!("{algorithm} sort requires non-negative integers, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Runs `algorithm` (a selector string) under the default config.
pub fn run(algorithm: &str, input: &[i64]) -> SortResult<Trace> {
    Engine::default().run_named(algorithm, input)
}

/// Copies `input` into a working array, lets `sort` record its steps and
/// closes the trace with the final (or trivial) step.
pub(crate) fn record_trace<F>(input: &[i64], sort: F) -> Trace
where
    F: FnOnce(&mut [i64], &mut Recorder),
{
    let mut working = input.to_vec();
    let mut rec = Recorder::new();
    if working.len() < 2 {
        rec.record(TRIVIAL_MESSAGE, &working);
    } else {
        sort(&mut working, &mut rec);
        rec.record(FINAL_MESSAGE, &working);
    }
    rec.finish()
}
