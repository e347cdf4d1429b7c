//! Character CRUD operations.

use std::sync::Arc;

use arena_domain::{Character, CharacterId, CharacterName, Job};

use crate::infrastructure::ports::{
    CharacterRepo, Page, PageDirection, PageRequest, RepoError, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};

use super::ManagementError;

/// Raw listing parameters as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCharacters {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub direction: PageDirection,
}

pub struct CharacterCrud {
    character: Arc<dyn CharacterRepo>,
}

impl CharacterCrud {
    pub fn new(character: Arc<dyn CharacterRepo>) -> Self {
        Self { character }
    }

    /// Create a full-health character from the job's base profile.
    pub async fn create(&self, name: String, job: String) -> Result<Character, ManagementError> {
        let name = CharacterName::new(name)?;
        let job = job.parse::<Job>()?;

        if self.character.get_by_name(name.as_str()).await?.is_some() {
            return Err(ManagementError::DuplicateName(name.to_string()));
        }

        let character = Character::from_job(name, job);
        match self.character.save(&character).await {
            Ok(()) => {}
            Err(RepoError::ConstraintViolation(_)) => {
                return Err(ManagementError::DuplicateName(character.name().to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(
            character_id = %character.id(),
            name = %character.name(),
            job = %character.job(),
            "Character created"
        );
        Ok(character)
    }

    pub async fn get(&self, character_id: CharacterId) -> Result<Character, ManagementError> {
        self.character
            .get(character_id)
            .await?
            .ok_or(ManagementError::NotFound(character_id))
    }

    /// List characters in creation order, one cursor page at a time.
    pub async fn list(&self, params: ListCharacters) -> Result<Page<Character>, ManagementError> {
        let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(ManagementError::InvalidInput(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}"
            )));
        }

        let cursor = match params.cursor.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(self.resolve_cursor(raw).await?),
        };

        let request = PageRequest {
            cursor,
            limit,
            direction: params.direction,
        };
        match self.character.list(request).await {
            Ok(page) => Ok(page),
            Err(e) if e.is_not_found() => Err(ManagementError::InvalidCursor(
                params.cursor.unwrap_or_default(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn resolve_cursor(&self, raw: &str) -> Result<CharacterId, ManagementError> {
        let invalid = || ManagementError::InvalidCursor(raw.to_string());
        let id = raw.parse::<CharacterId>().map_err(|_| invalid())?;
        match self.character.get(id).await? {
            Some(_) => Ok(id),
            None => Err(invalid()),
        }
    }
}
