use super::*;
use rand::seq::IndexedRandom;

/// Explores uniformly with probability `epsilon`, otherwise acts as [`Greedy`].
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy<'a> {
    table: &'a Table,
    epsilon: Probability,
}

impl<'a> EpsilonGreedy<'a> {
    pub fn new(table: &'a Table, epsilon: Probability) -> Self {
        debug_assert!((0.0..=1.0).contains(&epsilon));
        Self { table, epsilon }
    }
    pub fn epsilon(&self) -> Probability {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy<'_> {
    fn decide<R>(&self, heaps: &Heaps, rng: &mut R) -> Option<Take>
    where
        R: Rng + ?Sized,
    {
        if heaps.is_terminal() {
            return None;
        }
        if rng.random::<Probability>() < self.epsilon {
            heaps.choices().choose(rng).copied()
        } else {
            Greedy::new(self.table).decide(heaps, rng)
        }
    }
}
