use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::trace::Recorder;

const BASE: i64 = 10;

/// LSD radix sort in base 10. Inputs are non-negative; the engine rejects
/// anything else before dispatch.
pub(crate) struct RadixSort;

impl TraceSort for RadixSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Radix
    }

    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        // Digit passes reorder equal-prefix runs even when the input is
        // already sorted, so sorted input gets a single marker step.
        let mut sorted = true;
        for w in a.windows(2) {
            rec.count_comparison();
            if w[0] > w[1] {
                sorted = false;
                break;
            }
        }
        if sorted {
            rec.record("Array is already sorted; no digit passes needed", a);
            return;
        }

        let max = a.iter().copied().max().unwrap_or(0);
        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); BASE as usize];
        let mut place: i64 = 1;
        while max / place > 0 {
            rec.count_pass();
            for bucket in &mut buckets {
                bucket.clear();
            }
            for &value in a.iter() {
                buckets[digit(value, place)].push(value);
            }
            let sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
            rec.record(
                format!("Counting digits at place value {place}: bucket sizes {sizes:?}"),
                a,
            );

            for (slot, value) in a.iter_mut().zip(buckets.iter().flatten()) {
                *slot = *value;
            }
            rec.count_writes(a.len());
            rec.record(
                format!("Array after distributing by digit at place value {place}"),
                a,
            );

            match place.checked_mul(BASE) {
                Some(next) => place = next,
                None => break,
            }
        }
    }
}

fn digit(value: i64, place: i64) -> usize {
    ((value / place) % BASE) as usize
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::sorts::test_support::{arrays, messages, trace};

    #[test]
    fn one_redistribution_step_per_digit() {
        let trace = trace(Algorithm::Radix, &[170, 45, 75, 90, 802, 24, 2, 66]);
        let arrays = arrays(&trace);

        assert_eq!(trace.len(), 7);
        assert_eq!(
            messages(&trace)[0],
            "Counting digits at place value 1: bucket sizes [2, 0, 2, 0, 1, 2, 1, 0, 0, 0]"
        );
        assert_eq!(arrays[1], vec![170, 90, 802, 2, 24, 45, 75, 66]);
        assert_eq!(arrays[3], vec![802, 2, 24, 45, 66, 170, 75, 90]);
        assert_eq!(arrays[5], vec![2, 24, 45, 66, 75, 90, 170, 802]);
        assert_eq!(trace.stats().passes, 3);
    }

    #[test]
    fn handles_values_near_the_top_of_the_range() {
        let trace = trace(Algorithm::Radix, &[i64::MAX, 0, i64::MAX - 1]);

        assert_eq!(trace.stats().passes, 19);
        assert_eq!(
            trace.final_array(),
            Some(&[0, i64::MAX - 1, i64::MAX][..])
        );
    }

    #[test]
    fn all_zeros_need_no_passes() {
        let trace = trace(Algorithm::Radix, &[0, 0, 0]);

        assert_eq!(
            messages(&trace),
            vec![
                "Array is already sorted; no digit passes needed",
                "Final sorted array.",
            ]
        );
    }

    #[test]
    fn sorted_input_is_left_untouched() {
        let trace = trace(Algorithm::Radix, &[2, 11]);

        assert!(trace.iter().all(|s| s.array == vec![2, 11]));
        assert_eq!(trace.stats().passes, 0);
    }
}
