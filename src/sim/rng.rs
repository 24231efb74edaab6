//! Random source for spawning, splitting and fall speeds
//!
//! The simulation never touches a global RNG. Everything random goes through a
//! [`RandomPolicy`], so tests can seed it or script the exact draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{Chance, IntRange};

/// Source of integer draws used by the simulation
pub trait RandomPolicy {
    /// Uniform integer in `[lo, hi]` (both inclusive)
    fn randint(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform integer within an inclusive range
    fn draw(&mut self, range: IntRange) -> i32 {
        self.randint(range.min, range.max)
    }

    /// Single Bernoulli trial: roll `1..=denominator` and succeed at or below `numerator`
    fn trial(&mut self, chance: Chance) -> bool {
        if chance.numerator == 0 {
            return false;
        }
        let roll = self.randint(1, chance.denominator as i32);
        roll <= chance.numerator as i32
    }

    /// Fair coin; `true` means "heads" (the left-edge spawn)
    fn coin(&mut self) -> bool {
        self.randint(1, 2) == 2
    }
}

/// Seeded PCG policy used in real matches
#[derive(Debug, Clone)]
pub struct PcgPolicy {
    seed: u64,
    rng: Pcg32,
}

impl PcgPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomPolicy for PcgPolicy {
    fn randint(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed list of draws, for scripting exact scenarios.
///
/// Each value is clamped into the requested range. Once the script runs out
/// every draw returns `hi`, which makes every non-certain [`Chance`] fail.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    values: VecDeque<i32>,
}

impl ScriptedPolicy {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Draws left in the script
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomPolicy for ScriptedPolicy {
    fn randint(&mut self, lo: i32, hi: i32) -> i32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(lo, hi),
            None => hi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_draws_stay_in_range() {
        let mut rng = PcgPolicy::new(7);
        for _ in 0..1000 {
            let v = rng.randint(3, 8);
            assert!((3..=8).contains(&v));
        }
    }

    #[test]
    fn test_pcg_determinism() {
        let mut a = PcgPolicy::new(42);
        let mut b = PcgPolicy::new(42);
        for _ in 0..100 {
            assert_eq!(a.randint(1, 200), b.randint(1, 200));
        }
    }

    #[test]
    fn test_trial_edges() {
        let mut rng = PcgPolicy::new(1);
        for _ in 0..100 {
            assert!(!rng.trial(Chance::NEVER));
            assert!(rng.trial(Chance::ALWAYS));
        }
    }

    #[test]
    fn test_trial_threshold() {
        // 5/200 succeeds on rolls 1..=5
        let mut rng = ScriptedPolicy::new([5, 6, 1]);
        let chance = Chance::new(5, 200);
        assert!(rng.trial(chance));
        assert!(!rng.trial(chance));
        assert!(rng.trial(chance));
    }

    #[test]
    fn test_scripted_clamps_and_exhausts() {
        let mut rng = ScriptedPolicy::new([100, -5]);
        assert_eq!(rng.randint(3, 8), 8);
        assert_eq!(rng.randint(3, 8), 3);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.randint(1, 200), 200);
        assert!(!rng.trial(Chance::new(199, 200)));
    }

    #[test]
    fn test_trial_rate_roughly_matches() {
        let mut rng = PcgPolicy::new(2024);
        let chance = Chance::new(20, 200);
        let hits = (0..20_000).filter(|_| rng.trial(chance)).count();
        // Expect ~2000; allow generous slack
        assert!((1600..2400).contains(&hits), "hits = {hits}");
    }
}
