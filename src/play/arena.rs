use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// Results of the greedy agent against the optimal opponent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Games the agent could force: it moved first from a nonzero nim-sum,
    /// or the opponent moved first from a zero nim-sum.
    pub winnable: usize,
    /// Winnable games the agent actually won.
    pub converted: usize,
}

impl Record {
    pub fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            winnable: self.winnable + other.winnable,
            converted: self.converted + other.converted,
        }
    }
    pub fn win_rate(&self) -> Probability {
        self.wins as Probability / self.games.max(1) as Probability
    }
    /// Fraction of winnable games that were won.
    pub fn accuracy(&self) -> Probability {
        self.converted as Probability / self.winnable.max(1) as Probability
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<16}{:<16}{:<20}{}",
            format!("games {}", self.games),
            format!("won {}", self.wins),
            format!("lost {}", self.losses),
            format!("win {:.3}", self.win_rate()),
            format!("converted {}/{} ({:.3})", self.converted, self.winnable, self.accuracy()),
        )
    }
}

/// Plays independent seeded games in parallel against a read-only table.
pub struct Arena<'a> {
    table: &'a Table,
    heaps: usize,
    max: Sticks,
}

impl<'a> Arena<'a> {
    pub fn new(table: &'a Table, max: Sticks) -> anyhow::Result<Self> {
        let heaps = table
            .arity()
            .ok_or_else(|| anyhow::anyhow!("table holds no trained values"))?;
        anyhow::ensure!(max >= 1, "heaps must start with at least one stick");
        Ok(Self { table, heaps, max })
    }

    /// Game `i` is seeded with `seed + i`.
    pub fn evaluate(&self, games: usize, seed: u64) -> Record {
        let record = (0..games)
            .into_par_iter()
            .map(|i| self.game(&mut SmallRng::seed_from_u64(seed.wrapping_add(i as u64))))
            .reduce(Record::default, Record::merge);
        log::info!("{}", record);
        record
    }

    fn game<R>(&self, rng: &mut R) -> Record
    where
        R: Rng + ?Sized,
    {
        let heaps = Heaps::sample(self.heaps, self.max, rng);
        let seat = Seat::random(rng);
        let winnable = (seat == Seat::Learner) == (heaps.nim_sum() != 0);
        let outcome = Episode::new(heaps, seat).play(&Greedy::new(self.table), &Optimal, rng);
        let won = outcome == Outcome::LearnerWon;
        Record {
            games: 1,
            wins: won as usize,
            losses: (outcome == Outcome::OpponentWon) as usize,
            winnable: winnable as usize,
            converted: (winnable && won) as usize,
        }
    }
}
