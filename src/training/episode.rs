use super::*;
use rand::Rng;

/// One game between the learner and the opponent.
///
/// Only learner moves are recorded, each paired with the board it was made
/// on. The trace is consumed once by the trainer's update and discarded.
#[derive(Debug, Clone)]
pub struct Episode {
    heaps: Heaps,
    seat: Seat,
    trace: Vec<(Heaps, Take)>,
}

impl Episode {
    pub fn new(heaps: Heaps, seat: Seat) -> Self {
        Self {
            heaps,
            seat,
            trace: Vec::new(),
        }
    }
    /// Random board per `config`, random first mover.
    pub fn sample<R>(config: &Config, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let heaps = Heaps::sample(config.heaps, config.max, rng);
        let seat = Seat::random(rng);
        Self::new(heaps, seat)
    }
    pub fn heaps(&self) -> &Heaps {
        &self.heaps
    }
    /// Seat to move.
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn trace(&self) -> &[(Heaps, Take)] {
        &self.trace
    }
    /// Lets the seat to move make one take.
    ///
    /// Returns [`Outcome::Degenerate`] if there is nothing to take.
    pub fn step<L, O, R>(&mut self, learner: &L, opponent: &O, rng: &mut R) -> Outcome
    where
        L: Policy,
        O: Policy,
        R: Rng + ?Sized,
    {
        let decision = match self.seat {
            Seat::Learner => learner.decide(&self.heaps, rng),
            Seat::Opponent => opponent.decide(&self.heaps, rng),
        };
        let Some(take) = decision else {
            return Outcome::Degenerate;
        };
        if self.seat == Seat::Learner {
            self.trace.push((self.heaps.clone(), take));
        }
        self.heaps = self.heaps.apply(take);
        if self.heaps.is_terminal() {
            return Outcome::from(self.seat);
        }
        self.seat = self.seat.other();
        Outcome::Ongoing
    }
    /// Alternates turns until the episode is over.
    pub fn play<L, O, R>(&mut self, learner: &L, opponent: &O, rng: &mut R) -> Outcome
    where
        L: Policy,
        O: Policy,
        R: Rng + ?Sized,
    {
        loop {
            match self.step(learner, opponent, rng) {
                Outcome::Ongoing => continue,
                outcome => return outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn duel(heaps: Heaps, seat: Seat, seed: u64) -> Outcome {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        Episode::new(heaps, seat).play(&Optimal, &Optimal, rng)
    }

    #[test]
    fn empty_board_is_degenerate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let table = Table::default();
        let mut episode = Episode::new(Heaps::from([0, 0, 0]), Seat::Learner);
        let outcome = episode.play(&EpsilonGreedy::new(&table, 1.), &Optimal, rng);
        assert_eq!(outcome, Outcome::Degenerate);
        assert_eq!(outcome.reward(), Some(REWARD_NONE));
        assert!(episode.trace().is_empty());
    }

    #[test]
    fn last_take_decides_the_reward() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut episode = Episode::new(Heaps::from([0, 2]), Seat::Learner);
        let outcome = episode.play(&Optimal, &Optimal, rng);
        assert_eq!(outcome, Outcome::LearnerWon);
        assert_eq!(outcome.reward(), Some(REWARD_WIN));
        let mut episode = Episode::new(Heaps::from([0, 2]), Seat::Opponent);
        let outcome = episode.play(&Optimal, &Optimal, rng);
        assert_eq!(outcome, Outcome::OpponentWon);
        assert_eq!(outcome.reward(), Some(REWARD_LOSS));
        assert!(episode.trace().is_empty());
    }

    #[test]
    fn trace_holds_only_learner_moves() {
        let table = Table::default();
        for seed in 0..50 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut episode = Episode::sample(&Config::default(), rng);
            let first = episode.seat();
            let start = episode.heaps().clone();
            let mut learner = 0;
            loop {
                let mover = episode.seat();
                let outcome = episode.step(&EpsilonGreedy::new(&table, 0.5), &Optimal, rng);
                if mover == Seat::Learner {
                    learner += 1;
                }
                if outcome.is_over() {
                    assert_eq!(outcome.winner(), Some(mover));
                    break;
                }
            }
            assert_eq!(episode.trace().len(), learner);
            assert!(episode.heaps().is_terminal());
            if first == Seat::Learner {
                assert_eq!(episode.trace()[0].0, start);
            }
            for (heaps, take) in episode.trace() {
                assert!(heaps.choices().contains(take));
            }
            for pair in episode.trace().windows(2) {
                assert!(pair[1].0.sticks() < pair[0].0.sticks());
            }
        }
    }

    #[test]
    fn perfect_first_mover_wins_from_one_one_one() {
        let heaps = Heaps::from([1, 1, 1]);
        assert_ne!(heaps.nim_sum(), 0);
        for seed in 0..32 {
            assert_eq!(duel(heaps.clone(), Seat::Learner, seed), Outcome::LearnerWon);
            assert_eq!(duel(heaps.clone(), Seat::Opponent, seed), Outcome::OpponentWon);
        }
    }

    #[test]
    fn optimal_play_follows_nim_sum() {
        for heaps in Heaps::exhaust(HEAP_COUNT, MAX_HEAP_SIZE) {
            if heaps.is_terminal() {
                continue;
            }
            for seat in [Seat::Learner, Seat::Opponent] {
                for seed in 0..4 {
                    let winner = duel(heaps.clone(), seat, seed).winner();
                    match heaps.nim_sum() {
                        0 => assert_eq!(winner, Some(seat.other()), "{} {}", heaps, seat),
                        _ => assert_eq!(winner, Some(seat), "{} {}", heaps, seat),
                    }
                }
            }
        }
    }
}
