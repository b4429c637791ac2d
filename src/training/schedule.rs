use super::*;

/// Exploration rate, decayed once per episode and floored.
///
/// Threaded through the trainer by value: each episode reads the current
/// rate and the trainer stores the decayed one for the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epsilon {
    value: Probability,
    floor: Probability,
    decay: Probability,
}

impl Epsilon {
    pub fn new(start: Probability, floor: Probability, decay: Probability) -> Self {
        Self {
            value: start.max(floor),
            floor,
            decay,
        }
    }
    pub fn value(&self) -> Probability {
        self.value
    }
    /// The schedule one episode later.
    pub fn decay(self) -> Self {
        Self {
            value: (self.value * self.decay).max(self.floor),
            ..self
        }
    }
    /// Closed form after `n` episodes: max(floor, start · decay^n).
    pub fn after(start: Probability, floor: Probability, decay: Probability, n: usize) -> Probability {
        (start * decay.powf(n as Probability)).max(floor)
    }
}

impl Default for Epsilon {
    fn default() -> Self {
        Self::new(EPSILON_START, EPSILON_MIN, EPSILON_DECAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decays_geometrically() {
        let epsilon = Epsilon::default().decay().decay();
        assert!((epsilon.value() - 0.99 * 0.99).abs() < 1e-15);
    }

    #[test]
    fn matches_closed_form() {
        let mut epsilon = Epsilon::default();
        for n in 0..2000 {
            let expected = Epsilon::after(EPSILON_START, EPSILON_MIN, EPSILON_DECAY, n);
            assert!(
                (epsilon.value() - expected).abs() < 1e-9,
                "episode {}: {} != {}",
                n,
                epsilon.value(),
                expected
            );
            epsilon = epsilon.decay();
        }
    }

    #[test]
    fn never_drops_below_floor() {
        let epsilon = (0..10000).fold(Epsilon::default(), |e, _| e.decay());
        assert_eq!(epsilon.value(), EPSILON_MIN);
    }

    #[test]
    fn is_monotone() {
        let mut epsilon = Epsilon::new(0.8, 0.05, 0.9);
        for _ in 0..100 {
            let next = epsilon.decay();
            assert!(next.value() <= epsilon.value());
            epsilon = next;
        }
    }
}
