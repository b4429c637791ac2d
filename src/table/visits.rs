use super::*;
use std::collections::BTreeMap;

/// How many episodes have contributed a first-visit update to each pair.
///
/// Training-time bookkeeping only; counts grow monotonically and are not
/// persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visits(BTreeMap<Heaps, BTreeMap<Take, usize>>);

impl Visits {
    pub fn count(&self, heaps: &Heaps, take: &Take) -> usize {
        self.0
            .get(heaps)
            .and_then(|takes| takes.get(take))
            .copied()
            .unwrap_or(0)
    }
    /// Bumps the count and returns the new value.
    pub fn increment(&mut self, heaps: &Heaps, take: &Take) -> usize {
        let n = self
            .0
            .entry(heaps.clone())
            .or_default()
            .entry(*take)
            .or_insert(0);
        *n += 1;
        *n
    }
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
