//! Randomness port for battle resolution.

use arena_domain::BattleRng;

/// Hands out one independent RNG per battle.
pub trait RandomPort: Send + Sync {
    fn battle_rng(&self) -> Box<dyn BattleRng + Send>;
}
