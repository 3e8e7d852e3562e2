use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness the engine is allowed to consume. Tie-breaks and coin flips go
/// through this trait so tests can script the outcome.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn random_index(&mut self, len: usize) -> usize;

    fn random_bool(&mut self) -> bool;
}

/// Seeded generator owned by one game. Two sessions built from the same seed
/// make the same choices.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

/// Replays a fixed list of answers, wrapping each into range.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    picks: Vec<usize>,
    bools: Vec<bool>,
    calls: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        Self { picks, bools: Vec::new(), calls: 0 }
    }

    pub(crate) fn with_bools(bools: Vec<bool>) -> Self {
        Self { picks: Vec::new(), bools, calls: 0 }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn random_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.calls).copied().unwrap_or(0);
        self.calls += 1;
        pick % len
    }

    fn random_bool(&mut self) -> bool {
        let value = self.bools.get(self.calls).copied().unwrap_or(false);
        self.calls += 1;
        value
    }
}
