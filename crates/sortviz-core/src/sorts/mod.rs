//! Per-algorithm trace recording.

use crate::algorithm::Algorithm;
use crate::trace::Recorder;

pub(crate) mod bubble;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod radix;
pub(crate) mod selection;

/// A sorting algorithm that records its progress.
pub(crate) trait TraceSort: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Sorts `working` in place, recording each observable action.
    ///
    /// Only called with at least two elements; the engine records the
    /// trivial and final steps itself.
    fn sort(&self, working: &mut [i64], rec: &mut Recorder);
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::algorithm::Algorithm;
    use crate::engine::Engine;
    use crate::trace::Trace;

    pub(crate) fn trace(algorithm: Algorithm, input: &[i64]) -> Trace {
        Engine::default().run(algorithm, input).unwrap()
    }

    pub(crate) fn messages(trace: &Trace) -> Vec<&str> {
        trace.iter().map(|s| s.message.as_str()).collect()
    }

    pub(crate) fn arrays(trace: &Trace) -> Vec<Vec<i64>> {
        trace.iter().map(|s| s.array.clone()).collect()
    }
}
