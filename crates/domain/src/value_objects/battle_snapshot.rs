//! Battle snapshot - a combatant frozen at battle start.
//!
//! The battle engine never touches the source aggregate. It copies the
//! combat-relevant fields into a [`BattleSnapshot`] once and only ever lowers
//! the snapshot's health.

use crate::ids::CharacterId;
use crate::value_objects::Job;

/// Anything that can step into a battle.
///
/// Implemented by the `Character` aggregate; tests may implement it directly.
pub trait Combatant {
    fn combatant_id(&self) -> CharacterId;
    fn combatant_name(&self) -> &str;
    fn combatant_job(&self) -> Job;
    fn current_health(&self) -> i32;
    fn maximum_health(&self) -> i32;
    fn attack_modifier(&self) -> i32;
    fn speed_modifier(&self) -> i32;

    fn can_fight(&self) -> bool {
        self.current_health() > 0
    }
}

/// Mutable-health copy of a combatant owned by one battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSnapshot {
    id: CharacterId,
    name: String,
    job: Job,
    health_points: i32,
    max_health_points: i32,
    attack_power: i32,
    speed: i32,
}

impl BattleSnapshot {
    /// Copy a combatant's current state. Modifiers are evaluated once, here.
    pub fn capture(combatant: &impl Combatant) -> Self {
        Self {
            id: combatant.combatant_id(),
            name: combatant.combatant_name().to_string(),
            job: combatant.combatant_job(),
            health_points: combatant.current_health(),
            max_health_points: combatant.maximum_health(),
            attack_power: combatant.attack_modifier().max(0),
            speed: combatant.speed_modifier().max(0),
        }
    }

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn job(&self) -> Job {
        self.job
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
    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health_points > 0
    }

    /// Lower health by `damage`, never below zero. Negative damage is ignored.
    pub(crate) fn receive_damage(&mut self, damage: i32) {
        self.health_points = self.health_points.saturating_sub(damage.max(0)).max(0);
    }
}
