//! Checks a finished trace against the engine's invariants.

use crate::trace::Trace;

/// First invariant a trace breaks. Steps are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceViolation {
    #[error("trace has no steps")]
    Empty,

    #[error("step {step}: array has {actual} elements, input has {expected}")]
    LengthMismatch {
        step: usize,
        expected: usize,
        actual: usize,
    },

    #[error("step {step}: array is not a permutation of the input")]
    NotPermutation { step: usize },

    #[error("final array is out of order at position {position}")]
    NotSorted { position: usize },
}

/// Every step must hold the input's multiset and the last one must be
/// sorted in non-decreasing order.
pub fn verify_trace(input: &[i64], trace: &Trace) -> Result<(), TraceViolation> {
    let last = trace.last().ok_or(TraceViolation::Empty)?;

    let mut expected = input.to_vec();
    expected.sort_unstable();
    let mut seen = Vec::with_capacity(input.len());
    for (i, step) in trace.iter().enumerate() {
        if step.array.len() != input.len() {
            return Err(TraceViolation::LengthMismatch {
                step: i + 1,
                expected: input.len(),
                actual: step.array.len(),
            });
        }
        seen.clear();
        seen.extend_from_slice(&step.array);
        seen.sort_unstable();
        if seen != expected {
            return Err(TraceViolation::NotPermutation { step: i + 1 });
        }
    }

    if let Some(position) = last.array.windows(2).position(|w| w[0] > w[1]) {
        return Err(TraceViolation::NotSorted {
            position: position + 1,
        });
    }
    Ok(())
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
