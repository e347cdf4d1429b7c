//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating the repository.

mod character;

use arena_domain::{CharacterId, DomainError};

use crate::infrastructure::ports::RepoError;

pub use character::{CharacterCrud, ListCharacters};

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Character with id '{0}' not found")]
    NotFound(CharacterId),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Character name '{0}' is already in use")]
    DuplicateName(String),
    #[error("Invalid pagination cursor: '{0}'")]
    InvalidCursor(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub character: CharacterCrud,
}

impl ManagementUseCases {
    pub fn new(character: CharacterCrud) -> Self {
        Self { character }
    }
}
