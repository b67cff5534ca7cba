use super::TraceSort;
use crate::algorithm::Algorithm;
use crate::trace::Recorder;

pub(crate) struct InsertionSort;

impl TraceSort for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    // Shifts are adjacent exchanges so every snapshot stays a permutation of
    // the input; the key is never "out of the array" between steps.
    fn sort(&self, a: &mut [i64], rec: &mut Recorder) {
        for i in 1..a.len() {
            rec.count_pass();
            let key = a[i];
            rec.record(format!("Inserting {key} from position {i}"), a);

            let mut j = i;
            while j > 0 {
                let prev = a[j - 1];
                rec.count_comparison();
                if prev <= key {
                    rec.record(
                        format!("Compared {prev} at position {} with {key}: in order", j - 1),
                        a,
                    );
                    break;
                }
                rec.record(
                    format!("Compared {prev} at position {} with {key}: shifting right", j - 1),
                    a,
                );
                a.swap(j - 1, j);
                rec.count_writes(1);
                rec.record(format!("Shifted {prev} from position {} to {j}", j - 1), a);
                j -= 1;
            }
            rec.record(format!("Inserted {key} at position {j}"), a);
        }
    }
}
