use super::*;
use rand::seq::IndexedRandom;

/// The nim-sum strategy.
///
/// From a nonzero nim-sum it picks uniformly among the takes that leave a
/// zero nim-sum. From a zero nim-sum no take preserves a win, so it picks
/// uniformly among all takes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Optimal;

impl Optimal {
    /// Takes that leave the board with a zero nim-sum.
    pub fn balancing(heaps: &Heaps) -> Vec<Take> {
        heaps
            .choices()
            .into_iter()
            .filter(|take| heaps.apply(*take).nim_sum() == 0)
            .collect()
    }
}

impl Policy for Optimal {
    fn decide<R>(&self, heaps: &Heaps, rng: &mut R) -> Option<Take>
    where
        R: Rng + ?Sized,
    {
        let choices = heaps.choices();
        if choices.is_empty() {
            return None;
        }
        if heaps.nim_sum() == 0 {
            return choices.choose(rng).copied();
        }
        let balancing = Self::balancing(heaps);
        if balancing.is_empty() {
            log::warn!("no balancing take on {} despite nim-sum {}", heaps, heaps.nim_sum());
            return choices.choose(rng).copied();
        }
        balancing.choose(rng).copied()
    }
}
