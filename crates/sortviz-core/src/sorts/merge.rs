use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::engine::record_trace;
use crate::trace::{Recorder, Trace};

pub(crate) struct MergeSort;

impl TraceSort for MergeSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        let len = a.len();
        let mut origins: Vec<usize> = (0..len).collect();
        split(a, &mut origins, 0, len, rec);
    }
}

/// Merge sort that also reports, for every output position, the index the
/// element had in `input`. Equal values keep ascending origins.
///
/// No input ceiling is applied here; use [`crate::Engine`] for untrusted input.
pub fn sort_with_origins(input: &[i64]) -> (Trace, Vec<usize>) {
    let mut origins: Vec<usize> = (0..input.len()).collect();
    let trace = record_trace(input, |working, rec| {
        let len = working.len();
        split(working, &mut origins, 0, len, rec);
    });
    (trace, origins)
}

/// Top-down split over the half-open range `lo..hi`.
fn split(a: &mut [i64], origins: &mut [usize], lo: usize, hi: usize, rec: &mut Recorder) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    split(a, origins, lo, mid, rec);
    split(a, origins, mid, hi, rec);
    merge(a, origins, lo, mid, hi, rec);
}

fn merge(
    a: &mut [i64],
    origins: &mut [usize],
    lo: usize,
    mid: usize,
    hi: usize,
    rec: &mut Recorder,
) {
    rec.count_pass();
    let mut merged: Vec<(i64, usize)> = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (lo, mid);

    // The working array is untouched until write-back, so comparison
    // snapshots are still permutations of the input.
    while i < mid && j < hi {
        let (left, right) = (a[i], a[j]);
        rec.count_comparison();
        if left <= right {
            rec.record(
                format!("Compared {left} (left run) and {right} (right run): took {left} from the left"),
                a,
            );
            merged.push((left, origins[i]));
            i += 1;
        } else {
            rec.record(
                format!("Compared {left} (left run) and {right} (right run): took {right} from the right"),
                a,
            );
            merged.push((right, origins[j]));
            j += 1;
        }
    }
    merged.extend((i..mid).map(|k| (a[k], origins[k])));
    merged.extend((j..hi).map(|k| (a[k], origins[k])));

    for (offset, (value, origin)) in merged.into_iter().enumerate() {
        a[lo + offset] = value;
        origins[lo + offset] = origin;
    }
    rec.count_writes(hi - lo);
    rec.record(
        format!("Merged positions {lo}..={}: {:?}", hi - 1, &a[lo..hi]),
        a,
    );
}

#[cfg(test)]
mod tests {
    use super::sort_with_origins;
    use crate::algorithm::Algorithm;
    use crate::sorts::test_support::{arrays, messages, trace};

    #[test]
    fn records_comparisons_and_each_write_back() {
        let trace = trace(Algorithm::Merge, &[2, 1]);

        assert_eq!(
            messages(&trace),
            vec![
                "Compared 2 (left run) and 1 (right run): took 1 from the right",
                "Merged positions 0..=1: [1, 2]",
                "Final sorted array.",
            ]
        );
        assert_eq!(arrays(&trace), vec![vec![2, 1], vec![1, 2], vec![1, 2]]);
    }

    #[test]
    fn one_merge_step_per_merge_operation() {
        let trace = trace(Algorithm::Merge, &[4, 3, 2, 1, 0]);
        let merges = messages(&trace)
            .iter()
            .filter(|m| m.starts_with("Merged positions"))
            .count();

        // n - 1 merges for n elements
        assert_eq!(merges, 4);
        assert_eq!(trace.stats().passes, 4);
        assert_eq!(trace.final_array(), Some(&[0, 1, 2, 3, 4][..]));
    }

    #[test]
    fn equal_values_keep_their_original_order() {
        let (trace, origins) = sort_with_origins(&[2, 1, 2, 1]);

        assert_eq!(trace.final_array(), Some(&[1, 1, 2, 2][..]));
        assert_eq!(origins, vec![1, 3, 0, 2]);
    }

    #[test]
    fn left_run_wins_ties() {
        let trace = trace(Algorithm::Merge, &[5, 5]);

        assert_eq!(
            messages(&trace)[0],
            "Compared 5 (left run) and 5 (right run): took 5 from the left"
        );
    }
}
