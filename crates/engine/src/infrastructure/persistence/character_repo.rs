//! In-memory character storage.
//!
//! Characters are kept in insertion order so cursor pagination is stable.

use std::collections::HashMap;

use arena_domain::{Character, CharacterId};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, Page, PageDirection, PageRequest, RepoError};

#[derive(Default)]
struct Store {
    order: Vec<CharacterId>,
    by_id: HashMap<CharacterId, Character>,
}

impl Store {
    fn ordered(&self) -> impl Iterator<Item = &Character> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    fn name_taken_by_other(&self, character: &Character) -> bool {
        self.by_id.values().any(|existing| {
            existing.id() != character.id()
                && existing
                    .name()
                    .matches_ignore_case(character.name().as_str())
        })
    }
}

/// Process-local character store guarded by a `tokio::sync::RwLock`.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    store: RwLock<Store>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.store.read().await.by_id.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, RepoError> {
        let store = self.store.read().await;
        let found = store
            .ordered()
            .find(|character| character.name().matches_ignore_case(name))
            .cloned();
        Ok(found)
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        if store.name_taken_by_other(character) {
            return Err(RepoError::constraint(format!(
                "Character name '{}' is already in use",
                character.name()
            )));
        }

        if store
            .by_id
            .insert(character.id(), character.clone())
            .is_none()
        {
            store.order.push(character.id());
        }
        Ok(())
    }

    async fn list(&self, request: PageRequest) -> Result<Page<Character>, RepoError> {
        let store = self.store.read().await;
        let limit = request.limit as usize;
        let total = store.order.len();

        let start = match request.cursor {
            None => 0,
            Some(cursor) => {
                let idx = store
                    .order
                    .iter()
                    .position(|id| *id == cursor)
                    .ok_or_else(|| RepoError::not_found("Character", cursor))?;
                match request.direction {
                    PageDirection::Next => idx + 1,
                    PageDirection::Previous if idx == 0 => return Ok(Page::empty()),
                    PageDirection::Previous => idx.saturating_sub(limit),
                }
            }
        };

        let data: Vec<Character> = store.ordered().skip(start).take(limit).cloned().collect();

        Ok(Page {
            next_cursor: data.last().map(Character::id),
            previous_cursor: data.first().map(Character::id),
            has_more: start + limit < total,
            data,
        })
    }
}
