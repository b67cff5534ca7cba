use proptest::prelude::*;
use sortviz_core::verify::is_sorted;
use sortviz_core::{sort_with_origins, verify_trace, Algorithm, Engine};

fn signed_input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 0..40)
}

fn unsigned_input() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(
        prop_oneof![0i64..1_000, 0i64..=i64::MAX],
        0..40,
    )
}

fn check_all(input: &[i64], algorithms: &[Algorithm]) -> Result<(), TestCaseError> {
    let engine = Engine::default();
    for &algorithm in algorithms {
        let trace = engine.run(algorithm, input).unwrap();
        prop_assert_eq!(verify_trace(input, &trace), Ok(()), "{}", algorithm);

        let mut expected = input.to_vec();
        expected.sort();
        prop_assert_eq!(trace.final_array(), Some(expected.as_slice()));
    }
    Ok(())
}

const SIGNED: [Algorithm; 5] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Quick,
];

proptest! {
    #[test]
    fn comparison_sorts_permute_and_sort(input in signed_input()) {
        check_all(&input, &SIGNED)?;
    }

    #[test]
    fn every_algorithm_handles_non_negative_input(input in unsigned_input()) {
        check_all(&input, &Algorithm::ALL)?;
    }

    #[test]
    fn caller_input_is_never_mutated(input in signed_input()) {
        let before = input.clone();
        for algorithm in SIGNED {
            let _ = Engine::default().run(algorithm, &input).unwrap();
        }
        prop_assert_eq!(input, before);
    }

    #[test]
    fn caller_input_is_never_mutated_by_any_algorithm(input in unsigned_input()) {
        let before = input.clone();
        for algorithm in Algorithm::ALL {
            let _ = Engine::default().run(algorithm, &input).unwrap();
        }
        prop_assert_eq!(input, before);
    }

    #[test]
    fn resorting_a_sorted_array_changes_nothing(input in unsigned_input()) {
        for algorithm in Algorithm::ALL {
            let first = Engine::default().run(algorithm, &input).unwrap();
            let sorted = first.final_array().unwrap().to_vec();
            prop_assert!(is_sorted(&sorted));

            let again = Engine::default().run(algorithm, &sorted).unwrap();
            for step in &again {
                prop_assert_eq!(&step.array, &sorted, "{}: {}", algorithm, step.message);
            }
            prop_assert_eq!(again.stats().swaps, 0);
        }
    }

    #[test]
    fn merge_sort_is_stable(input in prop::collection::vec(0i64..5, 0..40)) {
        let (trace, origins) = sort_with_origins(&input);
        let output = trace.final_array().unwrap();

        // origins map output back to input
        for (value, &origin) in output.iter().zip(&origins) {
            prop_assert_eq!(*value, input[origin]);
        }
        // equal keys keep ascending origin order
        for pair in output.iter().zip(&origins).collect::<Vec<_>>().windows(2) {
            let ((v0, o0), (v1, o1)) = (pair[0], pair[1]);
            if v0 == v1 {
                prop_assert!(o0 < o1);
            }
        }
    }
}
