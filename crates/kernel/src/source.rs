//! Uniform index sources driving base and candidate selection.

use std::collections::VecDeque;

/// Supplies uniform random indices.
///
/// `pick(len)` must return a value in `0..len`. Callers never pass `len == 0`.
pub trait IndexSource {
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> IndexSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Always picks the same index, clamped into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Replays a fixed list of indices, then falls back to 0.
///
/// Each scripted value is clamped into range like [`FixedIndex`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndices {
    queue: VecDeque<usize>,
}

impl ScriptedIndices {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            queue: indices.into_iter().collect(),
        }
    }

    /// Number of scripted indices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl IndexSource for ScriptedIndices {
    fn pick(&mut self, len: usize) -> usize {
        self.queue
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fixed_index_clamps() {
        let mut src = FixedIndex(4);
        assert_eq!(src.pick(10), 4);
        assert_eq!(src.pick(3), 2);
        assert_eq!(src.pick(1), 0);
    }

    #[test]
    fn scripted_indices_replay_then_zero() {
        let mut src = ScriptedIndices::new([2, 9, 1]);
        assert_eq!(src.pick(5), 2);
        assert_eq!(src.pick(5), 4);
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.pick(5), 1);
        assert_eq!(src.pick(5), 0);
    }

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let xs: Vec<usize> = (0..32).map(|_| a.pick(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn works_through_trait_object() {
        let mut src = FixedIndex(1);
        let dyn_src: &mut dyn IndexSource = &mut src;
        assert_eq!(dyn_src.pick(6), 1);
    }
}
