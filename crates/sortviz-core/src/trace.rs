//! Trace data model and the step recorder shared by every algorithm.

use serde::{Deserialize, Serialize};

/// One recorded instant of a sort: what just happened and the array after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub message: String,
    pub array: Vec<i64>,
}

impl Step {
    /// Copies `array`; the step never aliases the working array.
    pub fn new(message: impl Into<String>, array: &[i64]) -> Self {
        Self {
            message: message.into(),
            array: array.to_vec(),
        }
    }
}

/// Operation counters collected while a trace is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
    pub passes: usize,
}

/// Ordered steps of one sort execution, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
    stats: TraceStats,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Array of the last step, i.e. the sorted result.
    pub fn final_array(&self) -> Option<&[i64]> {
        self.steps.last().map(|s| s.array.as_slice())
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only step log used while an algorithm runs.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    steps: Vec<Step>,
    stats: TraceStats,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a step holding a copy of `array` as it is right now.
    pub(crate) fn record(&mut self, message: impl Into<String>, array: &[i64]) {
        self.steps.push(Step::new(message, array));
    }

    pub(crate) fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    pub(crate) fn count_swap(&mut self) {
        self.stats.swaps += 1;
    }

    pub(crate) fn count_writes(&mut self, n: usize) {
        self.stats.writes += n;
    }

    pub(crate) fn count_pass(&mut self) {
        self.stats.passes += 1;
    }

    pub(crate) fn finish(self) -> Trace {
        Trace {
            steps: self.steps,
            stats: self.stats,
        }
    }
}
