//! Domain Events
//!
//! Return types from aggregate mutations and the records a battle produces,
//! communicating what happened when state was modified.

pub mod character_events;
pub mod combat_events;

pub use character_events::*;
pub use combat_events::*;
