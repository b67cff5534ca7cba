use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::trace::Recorder;

/// Lomuto partition; the pivot is the last element of the current range.
pub(crate) struct QuickSort;

impl TraceSort for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        // Inclusive ranges. Right is pushed before left so ranges are visited
        // in the same order as the recursive formulation.
        let mut pending = vec![(0usize, a.len() - 1)];
        while let Some((lo, hi)) = pending.pop() {
            let p = partition(a, lo, hi, rec);
            if p + 1 < hi {
                pending.push((p + 1, hi));
            }
            if p > lo + 1 {
                pending.push((lo, p - 1));
            }
        }
    }
}

fn partition(a: &mut [i64], lo: usize, hi: usize, rec: &mut Recorder) -> usize {
    rec.count_pass();
    let pivot = a[hi];
    rec.record(
        format!("Pivot selected: {pivot} (position {hi}, range {lo}..={hi})"),
        a,
    );

    let mut store = lo;
    for j in lo..hi {
        let value = a[j];
        rec.count_comparison();
        if value > pivot {
            rec.record(
                format!("Compared {value} at position {j} with pivot {pivot}: greater, stays right"),
                a,
            );
            continue;
        }
        rec.record(
            format!("Compared {value} at position {j} with pivot {pivot}: not greater, moves left"),
            a,
        );
        if store != j {
            a.swap(store, j);
            rec.count_swap();
            rec.record(format!("Swapped elements at positions {store} and {j}"), a);
        }
        store += 1;
    }

    if store != hi {
        a.swap(store, hi);
        rec.count_swap();
        rec.record(
            format!("Pivot {pivot} placed at final position {store} (swapped with position {hi})"),
            a,
        );
    } else {
        rec.record(format!("Pivot {pivot} already at final position {store}"), a);
    }
    store
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::sorts::test_support::{arrays, messages, trace};

    #[test]
    fn records_pivot_comparisons_swaps_and_placement() {
        let trace = trace(Algorithm::Quick, &[3, 1, 2]);

        assert_eq!(
            messages(&trace),
            vec![
                "Pivot selected: 2 (position 2, range 0..=2)",
                "Compared 3 at position 0 with pivot 2: greater, stays right",
                "Compared 1 at position 1 with pivot 2: not greater, moves left",
                "Swapped elements at positions 0 and 1",
                "Pivot 2 placed at final position 1 (swapped with position 2)",
                "Final sorted array.",
            ]
        );
        assert_eq!(arrays(&trace)[3], vec![1, 3, 2]);
        assert_eq!(arrays(&trace)[4], vec![1, 2, 3]);
        assert_eq!(trace.stats().swaps, 2);
    }

    #[test]
    fn left_partition_is_processed_before_right() {
        let trace = trace(Algorithm::Quick, &[9, 8, 1, 2, 5, 7, 6, 4]);
        let pivots: Vec<&str> = messages(&trace)
            .into_iter()
            .filter(|m| m.starts_with("Pivot selected"))
            .collect();

        // first partition puts 4 at position 2; then 0..=1, then 3..=7
        assert_eq!(pivots[0], "Pivot selected: 4 (position 7, range 0..=7)");
        assert_eq!(pivots[1], "Pivot selected: 2 (position 1, range 0..=1)");
        assert!(pivots[2].ends_with("range 3..=7)"));
        assert_eq!(trace.final_array(), Some(&[1, 2, 4, 5, 6, 7, 8, 9][..]));
    }

    #[test]
    fn sorted_input_records_no_swaps() {
        let trace = trace(Algorithm::Quick, &[1, 2, 3, 4, 5]);

        assert_eq!(trace.stats().swaps, 0);
        assert!(trace.iter().all(|s| s.array == vec![1, 2, 3, 4, 5]));
    }
}
