//! Storage adapters for the character repository port.

mod character_repo;

pub use character_repo::InMemoryCharacterRepo;
