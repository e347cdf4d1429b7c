//! Entities - domain objects with identity and a lifecycle of their own

pub mod battle;

pub use battle::{Battle, BattleError, BattleResult};
