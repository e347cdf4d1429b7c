//! Repository port traits for storage access.

use arena_domain::{Character, CharacterId};
use async_trait::async_trait;

use super::error::RepoError;
use super::types::{Page, PageRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;

    /// Case-insensitive lookup.
    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError>;

    /// Insert or replace. A new character is appended to the listing order.
    async fn save(&self, character: &Character) -> Result<(), RepoError>;

    /// Returns `RepoError::NotFound` when the request cursor is unknown.
    async fn list(&self, request: PageRequest) -> Result<Page<Character>, RepoError>;
}
