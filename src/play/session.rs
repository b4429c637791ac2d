use super::*;
use rand::Rng;

/// A single interactive game: a human against the greedy agent.
///
/// The agent holds [`Seat::Learner`], the human [`Seat::Opponent`]. The
/// table is only ever read.
pub struct Session<'a> {
    agent: Greedy<'a>,
    human: Human,
    heaps: usize,
    max: Sticks,
}

impl<'a> Session<'a> {
    /// Fails if the table has nothing to play with.
    pub fn new(table: &'a Table, max: Sticks) -> anyhow::Result<Self> {
        let heaps = table
            .arity()
            .ok_or_else(|| anyhow::anyhow!("table holds no trained values"))?;
        anyhow::ensure!(max >= 1, "heaps must start with at least one stick");
        Ok(Self {
            agent: Greedy::new(table),
            human: Human,
            heaps,
            max,
        })
    }

    /// Plays to the end and returns the winner.
    pub fn play<R>(&self, rng: &mut R) -> anyhow::Result<Seat>
    where
        R: Rng + ?Sized,
    {
        let mut heaps = Heaps::sample(self.heaps, self.max, rng);
        let mut seat = Seat::random(rng);
        let first = match seat {
            Seat::Learner => "The agent moves first",
            Seat::Opponent => "You move first",
        };
        println!("{}", first.bold());
        loop {
            println!("\n{}\n", render(&heaps));
            let take = match seat {
                Seat::Opponent => self.human.decide(&heaps)?,
                Seat::Learner => {
                    let take = self
                        .agent
                        .decide(&heaps, rng)
                        .ok_or_else(|| anyhow::anyhow!("agent has no move on {}", heaps))?;
                    println!("agent: {}", take);
                    take
                }
            };
            log::debug!("{} plays {} on {}", Self::name(seat), take, heaps);
            heaps = heaps.apply(take);
            if heaps.is_terminal() {
                match seat {
                    Seat::Opponent => println!("\n{}", "You took the last stick. You win!".green()),
                    Seat::Learner => println!("\n{}", "The agent took the last stick. You lose.".red()),
                }
                return Ok(seat);
            }
            seat = seat.other();
        }
    }

    fn name(seat: Seat) -> &'static str {
        match seat {
            Seat::Learner => "agent",
            Seat::Opponent => "you",
        }
    }
}
