//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod battle;
pub mod management;

pub use battle::BattleUseCases;
pub use management::ManagementUseCases;
