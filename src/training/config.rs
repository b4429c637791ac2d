use super::*;

/// Everything a training run needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of heaps on every board.
    pub heaps: usize,
    /// Initial heap sizes are drawn from 1..=max.
    pub max: Sticks,
    /// Episodes to play; there is no early stopping.
    pub episodes: usize,
    pub epsilon_start: Probability,
    pub epsilon_min: Probability,
    pub epsilon_decay: Probability,
    /// Fixed seed for reproducible runs; OS entropy otherwise.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heaps: HEAP_COUNT,
            max: MAX_HEAP_SIZE,
            episodes: EPISODE_COUNT,
            epsilon_start: EPSILON_START,
            epsilon_min: EPSILON_MIN,
            epsilon_decay: EPSILON_DECAY,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.heaps >= 1, "need at least one heap");
        anyhow::ensure!(self.max >= 1, "heaps must start with at least one stick");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.epsilon_start),
            "epsilon start {} outside [0, 1]",
            self.epsilon_start
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.epsilon_min),
            "epsilon floor {} outside [0, 1]",
            self.epsilon_min
        );
        anyhow::ensure!(
            self.epsilon_min <= self.epsilon_start,
            "epsilon floor {} above start {}",
            self.epsilon_min,
            self.epsilon_start
        );
        anyhow::ensure!(
            self.epsilon_decay > 0. && self.epsilon_decay <= 1.,
            "epsilon decay {} outside (0, 1]",
            self.epsilon_decay
        );
        Ok(())
    }
    pub fn epsilon(&self) -> Epsilon {
        Epsilon::new(self.epsilon_start, self.epsilon_min, self.epsilon_decay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.heaps, 3);
        assert_eq!(config.max, 5);
        assert_eq!(config.episodes, 30000);
    }

    #[test]
    fn rejects_empty_boards() {
        let config = Config { max: 0, ..Config::default() };
        assert!(config.validate().is_err());
        let config = Config { heaps: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_schedules() {
        let config = Config { epsilon_start: 1.5, ..Config::default() };
        assert!(config.validate().is_err());
        let config = Config { epsilon_min: 0.5, epsilon_start: 0.1, ..Config::default() };
        assert!(config.validate().is_err());
        let config = Config { epsilon_decay: 0., ..Config::default() };
        assert!(config.validate().is_err());
    }
}
