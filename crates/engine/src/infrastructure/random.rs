//! Random implementations.

use arena_domain::{BattleRng, SeededRng};
use rand::rngs::OsRng;
use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// System random - draws from the operating system's CSPRNG.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn battle_rng(&self) -> Box<dyn BattleRng + Send> {
        Box::new(OsBattleRng)
    }
}

/// Stateless adapter from `OsRng` to the battle RNG contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsBattleRng;

impl BattleRng for OsBattleRng {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        OsRng.gen_range(min..max)
    }
}

/// Seeded random - every battle replays the same sequence.
pub struct SeededRandom {
    seed: i64,
}

impl SeededRandom {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }
}

impl RandomPort for SeededRandom {
    fn battle_rng(&self) -> Box<dyn BattleRng + Send> {
        Box::new(SeededRng::new(self.seed))
    }
}
