//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (in-memory today, swappable for a database)
//! - Randomness (OS entropy in production, seeded for replays and tests)

mod error;
mod random;
mod repos;
pub mod types;

pub use error::RepoError;
pub use random::RandomPort;
pub use repos::*;
pub use types::{Page, PageDirection, PageRequest, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
