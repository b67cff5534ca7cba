use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::trace::Recorder;

pub(crate) struct SelectionSort;

impl TraceSort for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        let n = a.len();
        for i in 0..n - 1 {
            rec.count_pass();
            let mut min = i;
            for j in i + 1..n {
                rec.count_comparison();
                let (candidate, current) = (a[j], a[min]);
                if candidate < current {
                    rec.record(
                        format!(
                            "Compared {candidate} at position {j} with minimum {current} at position {min}: new minimum"
                        ),
                        a,
                    );
                    min = j;
                } else {
                    rec.record(
                        format!(
                            "Compared {candidate} at position {j} with minimum {current} at position {min}: minimum unchanged"
                        ),
                        a,
                    );
                }
            }
            rec.record(
                format!("Selected minimum {} at position {min} for position {i}", a[min]),
                a,
            );
            if min != i {
                a.swap(i, min);
                rec.count_swap();
                rec.record(format!("Swapped elements at positions {i} and {min}"), a);
            } else {
                rec.record(format!("{} already in position {i}", a[i]), a);
            }
        }
    }
}
