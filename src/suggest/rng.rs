use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice among `n` options. Injected so selection can be replayed.
pub trait RandomSource: Send {
    /// Index in `0..n`; `n` of 0 or 1 always yields 0.
    fn pick(&mut self, n: usize) -> usize;
}

/// `StdRng` backed source, reproducible when seeded
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, n: usize) -> usize {
        if n <= 1 {
            0
        } else {
            self.rng.random_range(0..n)
        }
    }
}

/// Replays a fixed list of picks, wrapping around and reducing modulo `n`
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, n: usize) -> usize {
        if n <= 1 || self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % n
    }
}
