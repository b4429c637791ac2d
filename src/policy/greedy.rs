use super::*;
use rand::seq::IndexedRandom;

/// Picks uniformly among the takes with the highest action value.
///
/// Only reads the table: unseen pairs count as zero and are never inserted,
/// and nothing is recorded. This is the play-time lookup.
#[derive(Debug, Clone, Copy)]
pub struct Greedy<'a>(&'a Table);

impl<'a> Greedy<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self(table)
    }
    /// Every take tied at the maximum action value, in `choices()` order.
    pub fn best(table: &Table, heaps: &Heaps) -> Vec<Take> {
        let choices = heaps.choices();
        let values = choices
            .iter()
            .map(|take| table.value(heaps, take))
            .collect::<Vec<_>>();
        let max = values.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
        choices
            .into_iter()
            .zip(values)
            .filter(|(_, value)| *value == max)
            .map(|(take, _)| take)
            .collect()
    }
}

impl Policy for Greedy<'_> {
    fn decide<R>(&self, heaps: &Heaps, rng: &mut R) -> Option<Take>
    where
        R: Rng + ?Sized,
    {
        Self::best(self.0, heaps).choose(rng).copied()
    }
}
