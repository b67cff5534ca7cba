use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::trace::Recorder;

pub(crate) struct BubbleSort;

impl TraceSort for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        let mut end = a.len();
        let mut pass = 0;
        while end > 1 {
            pass += 1;
            rec.count_pass();
            let mut swapped = false;
            for j in 0..end - 1 {
                let (left, right) = (a[j], a[j + 1]);
                rec.count_comparison();
                if left > right {
                    a.swap(j, j + 1);
                    rec.count_swap();
                    swapped = true;
                    rec.record(
                        format!(
                            "Compared {left} and {right} at positions {j} and {}: swapped",
                            j + 1
                        ),
                        a,
                    );
                } else {
                    rec.record(
                        format!(
                            "Compared {left} and {right} at positions {j} and {}: no swap",
                            j + 1
                        ),
                        a,
                    );
                }
            }
            if !swapped {
                rec.record(
                    format!("Pass {pass} made no swaps; stopping early"),
                    a,
                );
                return;
            }
            end -= 1;
        }
        rec.record(format!("Unsorted region exhausted after pass {pass}"), a);
    }
}
