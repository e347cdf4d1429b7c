//! Value objects - Immutable objects defined by their attributes

mod battle_snapshot;
mod job;
mod names;
mod stat_block;

pub use battle_snapshot::{BattleSnapshot, Combatant};
pub use job::{Job, JobProfile};
pub use names::CharacterName;
pub use stat_block::StatBlock;
