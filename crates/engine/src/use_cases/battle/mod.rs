//! Battle use cases.
//!
//! The battle flow is:
//! 1. Both combatants are loaded and checked (distinct, present, alive)
//! 2. The domain battle engine fights to completion on snapshots
//! 3. The stored loser drops to 0 HP and the stored winner loses
//!    `max_hp - simulated_hp`
//! 4. The narrative log is returned to the caller

use std::sync::Arc;

mod execute;

pub use execute::{ExecuteBattle, ExecuteBattleError};

/// Container for battle use cases.
pub struct BattleUseCases {
    pub execute: Arc<ExecuteBattle>,
}

impl BattleUseCases {
    pub fn new(execute: Arc<ExecuteBattle>) -> Self {
        Self { execute }
    }
}
