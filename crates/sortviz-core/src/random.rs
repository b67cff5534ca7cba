//! Random input arrays for interactive use.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of a generated array: `len` integers drawn uniformly from `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomArray {
    pub len: usize,
    pub max: i64,
}

impl Default for RandomArray {
    fn default() -> Self {
        Self { len: 10, max: 100 }
    }
}

impl RandomArray {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        let max = self.max.max(0);
        (0..self.len).map(|_| rng.gen_range(0..=max)).collect()
    }

    /// Deterministic for a given seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    pub fn generate_fresh(&self) -> Vec<i64> {
        self.generate(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_matches_the_ui_generator() {
        let values = RandomArray::default().generate_seeded(42);
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (0..=100).contains(v)));
    }

    #[test]
    fn same_seed_same_array() {
        let shape = RandomArray { len: 25, max: 1_000 };
        assert_eq!(shape.generate_seeded(7), shape.generate_seeded(7));
    }

    #[test]
    fn zero_max_yields_zeros() {
        let values = RandomArray { len: 5, max: 0 }.generate_fresh();
        assert_eq!(values, vec![0; 5]);
    }
}
