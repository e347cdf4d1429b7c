//! Execute battle use case.
//!
//! Runs a single battle between two stored characters and persists the
//! result. The battle itself works on snapshots; this use case is the only
//! place where its outcome touches stored state.

use std::sync::Arc;

use arena_domain::{Battle, BattleError, BattleSnapshot, CharacterId, DomainError};

use crate::infrastructure::ports::{CharacterRepo, RandomPort, RepoError};

/// Execute battle use case.
pub struct ExecuteBattle {
    character: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
}

impl ExecuteBattle {
    pub fn new(character: Arc<dyn CharacterRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { character, random }
    }

    /// Fight `first_id` against `second_id` and return the battle log.
    ///
    /// # Returns
    /// * `Ok(String)` - The full narrative log
    /// * `Err(ExecuteBattleError)` - A precondition failed or storage failed
    pub async fn execute(
        &self,
        first_id: CharacterId,
        second_id: CharacterId,
    ) -> Result<String, ExecuteBattleError> {
        if first_id == second_id {
            return Err(ExecuteBattleError::SelfBattle(first_id));
        }

        let first = self
            .character
            .get(first_id)
            .await?
            .ok_or(ExecuteBattleError::CharacterNotFound(first_id))?;
        let second = self
            .character
            .get(second_id)
            .await?
            .ok_or(ExecuteBattleError::CharacterNotFound(second_id))?;

        if let Some(fallen) = [&first, &second].into_iter().find(|c| !c.is_alive()) {
            return Err(ExecuteBattleError::CharacterNotAlive(fallen.id()));
        }

        let mut battle = Battle::create(&first, &second, self.random.battle_rng())?;
        tracing::debug!(
            battle_id = %battle.id(),
            first_id = %first_id,
            second_id = %second_id,
            "Battle starting"
        );

        let outcome = battle.fight()?;

        self.settle(&outcome.loser, Role::Loser).await?;
        self.settle(&outcome.winner, Role::Winner).await?;

        tracing::info!(
            battle_id = %battle.id(),
            winner = %outcome.winner.id(),
            loser = %outcome.loser.id(),
            winner_hp = outcome.winner.health_points(),
            rounds = battle.rounds().len(),
            "Battle concluded"
        );

        Ok(outcome.log)
    }

    /// Apply the battle's outcome to the stored character.
    ///
    /// The loser is damaged down to 0. The winner takes
    /// `max_hp - simulated_hp`, so it keeps the share of its max HP it ended
    /// the battle with. A character that disappeared in between is skipped.
    async fn settle(
        &self,
        snapshot: &BattleSnapshot,
        role: Role,
    ) -> Result<(), ExecuteBattleError> {
        let Some(mut character) = self.character.get(snapshot.id()).await? else {
            tracing::warn!(
                character_id = %snapshot.id(),
                role = role.as_str(),
                "Character missing after battle, skipping reconciliation"
            );
            return Ok(());
        };

        let damage = match role {
            Role::Loser => character.health_points(),
            Role::Winner => (character.max_health_points() - snapshot.health_points()).max(0),
        };
        character.receive_damage(damage)?;
        self.character.save(&character).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Winner,
    Loser,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Winner => "winner",
            Role::Loser => "loser",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecuteBattleError {
    #[error("Character with ID {0} cannot battle itself.")]
    SelfBattle(CharacterId),
    #[error("Character with id '{0}' not found")]
    CharacterNotFound(CharacterId),
    #[error("Character with ID {0} is not alive and cannot battle.")]
    CharacterNotAlive(CharacterId),
    #[error(transparent)]
    Battle(#[from] BattleError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
