use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeSet;

/// Owns the value table while it is being learned.
///
/// Episodes run strictly in sequence: each episode's update is applied and
/// epsilon decayed before the next one starts.
pub struct Trainer {
    config: Config,
    table: Table,
    visits: Visits,
    epsilon: Epsilon,
    rng: SmallRng,
    total: Progress,
    window: Progress,
}

impl Trainer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            config,
            rng,
            table: Table::default(),
            visits: Visits::default(),
            epsilon: config.epsilon(),
            total: Progress::default(),
            window: Progress::default(),
        })
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn into_table(self) -> Table {
        self.table
    }
    pub fn visits(&self) -> &Visits {
        &self.visits
    }
    pub fn epsilon(&self) -> Epsilon {
        self.epsilon
    }

    /// Runs the configured number of episodes.
    pub fn train(&mut self) -> Progress {
        log::info!(
            "training {} episodes on {} heaps of up to {} sticks",
            self.config.episodes,
            self.config.heaps,
            self.config.max
        );
        for i in 1..=self.config.episodes {
            self.episode();
            if i % PROGRESS_INTERVAL == 0 {
                log::info!(
                    "{:<16}{:<16}{:<16}{}",
                    format!("episode {}", i),
                    format!("ε {:.4}", self.epsilon.value()),
                    format!("pairs {}", self.table.len()),
                    self.window.format()
                );
                self.window = Progress::default();
            }
        }
        log::info!("training complete, {} pairs learned", self.table.len());
        log::info!("{}", self.total.format());
        self.total
    }

    /// Plays one episode, credits its reward, and decays epsilon.
    pub fn episode(&mut self) -> Outcome {
        let mut episode = Episode::sample(&self.config, &mut self.rng);
        let learner = EpsilonGreedy::new(&self.table, self.epsilon.value());
        let outcome = episode.play(&learner, &Optimal, &mut self.rng);
        let reward = outcome.reward().unwrap_or(REWARD_NONE);
        log::debug!("{:?} after {} learner moves", outcome, episode.trace().len());
        self.update(episode.trace(), reward);
        self.epsilon = self.epsilon.decay();
        self.total.record(outcome);
        self.window.record(outcome);
        outcome
    }

    /// First-visit credit assignment: every distinct (heaps, take) pair in
    /// the trace gets one more visit and moves its mean toward `reward`.
    pub fn update(&mut self, trace: &[(Heaps, Take)], reward: Utility) {
        let mut seen = BTreeSet::new();
        for pair in trace {
            if seen.insert(pair) {
                let (heaps, take) = pair;
                let n = self.visits.increment(heaps, take);
                self.table.average(heaps, take, reward, n);
            }
        }
    }
}
