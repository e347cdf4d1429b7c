//! Character aggregate - a combatant with a job, base stats and health
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName` for validated names, `Job` for the closed class set
//! - **Domain events**: Mutations return outcome enums (`DamageOutcome`)
//! - **Valid by construction**: `new()` checks every health/stat bound once
//!
//! Stats never change after creation. Health only ever goes down.

use crate::error::DomainError;
use crate::events::DamageOutcome;
use crate::ids::CharacterId;
use crate::value_objects::{CharacterName, Combatant, Job, StatBlock};

/// A character that can take part in battles
///
/// # Invariants
///
/// - `0 <= health_points <= max_health_points`
/// - `max_health_points > 0`
/// - `is_alive() == (health_points > 0)`
///
/// # Example
///
/// ```
/// use arena_domain::aggregates::Character;
/// use arena_domain::value_objects::{CharacterName, Job};
///
/// let name = CharacterName::new("Hero_One").unwrap();
/// let character = Character::from_job(name, Job::Warrior);
///
/// assert_eq!(character.health_points(), 20);
/// assert_eq!(character.attack_power(), 9);
/// assert!(character.is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    job: Job,
    stats: StatBlock,
    health_points: i32,
    max_health_points: i32,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a character from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_health_points` is not
    /// positive, `health_points` is negative, or `health_points` exceeds
    /// `max_health_points`.
    pub fn new(
        id: CharacterId,
        name: CharacterName,
        job: Job,
        stats: StatBlock,
        health_points: i32,
        max_health_points: i32,
    ) -> Result<Self, DomainError> {
        if max_health_points <= 0 {
            return Err(DomainError::validation("maxHealthPoints must be positive"));
        }
        if health_points < 0 {
            return Err(DomainError::validation("healthPoints cannot be negative"));
        }
        if health_points > max_health_points {
            return Err(DomainError::validation(
                "healthPoints cannot exceed maxHealthPoints",
            ));
        }

        Ok(Self {
            id,
            name,
            job,
            stats,
            health_points,
            max_health_points,
        })
    }

    /// Create a fresh, full-health character from the job's base profile.
    pub fn from_job(name: CharacterName, job: Job) -> Self {
        let profile = job.base_profile();
        Self {
            id: CharacterId::new(),
            name,
            job,
            stats: profile.stats,
            health_points: profile.max_health_points,
            max_health_points: profile.max_health_points,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn job(&self) -> Job {
        self.job
    }

    #[inline]
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    #[inline]
    pub fn health_points(&self) -> i32 {
        self.health_points
    }

    #[inline]
    pub fn max_health_points(&self) -> i32 {
        self.max_health_points
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health_points > 0
    }

    /// Attack modifier, recomputed from job and stats on every call.
    #[inline]
    pub fn attack_power(&self) -> i32 {
        self.job.attack_power(&self.stats)
    }

    /// Speed modifier, recomputed from job and stats on every call.
    #[inline]
    pub fn speed(&self) -> i32 {
        self.job.speed(&self.stats)
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Apply damage to the character.
    ///
    /// Health never drops below zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `damage` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use arena_domain::DamageOutcome;
    /// use arena_domain::aggregates::Character;
    /// use arena_domain::value_objects::{CharacterName, Job};
    ///
    /// let name = CharacterName::new("Boromir").unwrap();
    /// let mut character = Character::from_job(name, Job::Warrior);
    ///
    /// match character.receive_damage(5).unwrap() {
    ///     DamageOutcome::Wounded { damage_dealt, remaining_hp } => {
    ///         assert_eq!(damage_dealt, 5);
    ///         assert_eq!(remaining_hp, 15);
    ///     }
    ///     _ => panic!("Expected Wounded outcome"),
    /// }
    /// ```
    pub fn receive_damage(&mut self, damage: i32) -> Result<DamageOutcome, DomainError> {
        if damage < 0 {
            return Err(DomainError::validation("Damage cannot be negative"));
        }
        if !self.is_alive() {
            return Ok(DamageOutcome::AlreadyDead);
        }

        self.health_points = self.health_points.saturating_sub(damage).max(0);

        if self.health_points == 0 {
            Ok(DamageOutcome::Killed {
                damage_dealt: damage,
            })
        } else {
            Ok(DamageOutcome::Wounded {
                damage_dealt: damage,
                remaining_hp: self.health_points,
            })
        }
    }
}

impl Combatant for Character {
    fn combatant_id(&self) -> CharacterId {
        self.id
    }

    fn combatant_name(&self) -> &str {
        self.name.as_str()
    }

    fn combatant_job(&self) -> Job {
        self.job
    }

    fn current_health(&self) -> i32 {
        self.health_points
    }

    fn maximum_health(&self) -> i32 {
        self.max_health_points
    }

    fn attack_modifier(&self) -> i32 {
        self.attack_power()
    }

    fn speed_modifier(&self) -> i32 {
        self.speed()
    }
}
