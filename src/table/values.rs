use super::*;
use std::collections::BTreeMap;

/// Action-value estimates Q(heaps, take) from the learner's perspective.
///
/// Reads and writes are kept apart: [`Table::value`] never inserts and
/// reports 0 for unseen pairs, while [`Table::entry`] inserts on miss and is
/// only used by the training update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table(BTreeMap<Heaps, BTreeMap<Take, Utility>>);

impl Table {
    pub fn value(&self, heaps: &Heaps, take: &Take) -> Utility {
        self.0
            .get(heaps)
            .and_then(|takes| takes.get(take))
            .copied()
            .unwrap_or(0.)
    }
    pub fn entry(&mut self, heaps: &Heaps, take: &Take) -> &mut Utility {
        self.0
            .entry(heaps.clone())
            .or_default()
            .entry(*take)
            .or_insert(0.)
    }
    /// Folds the `n`-th observed return into the running mean:
    /// Q ← Q + (reward − Q) / n
    pub fn average(&mut self, heaps: &Heaps, take: &Take, reward: Utility, n: usize) {
        debug_assert!(n >= 1);
        let q = self.entry(heaps, take);
        *q += (reward - *q) / n as Utility;
    }
    pub fn insert(&mut self, heaps: Heaps, take: Take, value: Utility) {
        self.0.entry(heaps).or_default().insert(take, value);
    }
    /// Number of (heaps, take) pairs stored.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Heap count shared by every stored board, if the table is
    /// non-empty and consistent.
    pub fn arity(&self) -> Option<usize> {
        let mut lengths = self.0.keys().map(Heaps::len);
        let first = lengths.next()?;
        lengths.all(|n| n == first).then_some(first)
    }
    /// All pairs in deterministic (heaps, take) order.
    pub fn iter(&self) -> impl Iterator<Item = (&Heaps, &Take, Utility)> + '_ {
        self.0
            .iter()
            .flat_map(|(heaps, takes)| takes.iter().map(move |(take, &q)| (heaps, take, q)))
    }
}

impl FromIterator<(Heaps, Take, Utility)> for Table {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Heaps, Take, Utility)>,
    {
        let mut table = Self::default();
        for (heaps, take, value) in iter {
            table.insert(heaps, take, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_reads_without_inserting() {
        let table = Table::default();
        assert_eq!(table.value(&Heaps::from([1, 2]), &Take::new(0, 1)), 0.);
        assert!(table.is_empty());
    }

    #[test]
    fn entry_inserts_zero_on_miss() {
        let mut table = Table::default();
        let heaps = Heaps::from([1, 2]);
        assert_eq!(*table.entry(&heaps, &Take::new(1, 2)), 0.);
        assert_eq!(table.len(), 1);
        *table.entry(&heaps, &Take::new(1, 2)) = 0.5;
        assert_eq!(table.value(&heaps, &Take::new(1, 2)), 0.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn running_mean_matches_direct_average() {
        let rewards = [1., -1., -1., 1., 1., 1., -1., 0., 1., -1., 1., 1.];
        let heaps = Heaps::from([3, 1]);
        let take = Take::new(0, 2);
        let mut table = Table::default();
        for (i, &reward) in rewards.iter().enumerate() {
            table.average(&heaps, &take, reward, i + 1);
            let mean = rewards[..=i].iter().sum::<Utility>() / (i + 1) as Utility;
            assert!((table.value(&heaps, &take) - mean).abs() < 1e-12);
        }
    }

    #[test]
    fn arity_requires_consistent_boards() {
        let mut table = Table::default();
        assert_eq!(table.arity(), None);
        table.insert(Heaps::from([1, 2, 3]), Take::new(0, 1), 0.);
        table.insert(Heaps::from([4, 2, 3]), Take::new(0, 1), 0.);
        assert_eq!(table.arity(), Some(3));
        table.insert(Heaps::from([1]), Take::new(0, 1), 0.);
        assert_eq!(table.arity(), None);
    }

    #[test]
    fn iter_is_ordered() {
        let table = [
            (Heaps::from([2]), Take::new(0, 2), 1.),
            (Heaps::from([1]), Take::new(0, 1), 1.),
            (Heaps::from([2]), Take::new(0, 1), -1.),
        ]
        .into_iter()
        .collect::<Table>();
        let keys = table
            .iter()
            .map(|(h, t, _)| (h.clone(), *t))
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                (Heaps::from([1]), Take::new(0, 1)),
                (Heaps::from([2]), Take::new(0, 1)),
                (Heaps::from([2]), Take::new(0, 2)),
            ]
        );
    }
}
