//! Arena domain: characters, jobs and the battle engine.
//!
//! Pure business logic with no I/O. Randomness reaches the battle engine only
//! through the [`BattleRng`] strategy, so every battle can be replayed from a
//! seed.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod rng;
pub mod value_objects;

pub use aggregates::Character;
pub use entities::{Battle, BattleError, BattleResult};
pub use error::DomainError;
pub use events::{BattleOutcome, DamageOutcome, RoundRecord, TurnRecord};
pub use ids::{BattleId, CharacterId};
pub use rng::{BattleRng, SeededRng};
pub use value_objects::{BattleSnapshot, CharacterName, Combatant, Job, JobProfile, StatBlock};
