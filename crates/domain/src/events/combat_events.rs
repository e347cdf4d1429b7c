//! Combat-related domain events
//!
//! Records appended by a battle while it runs, plus the outcome handed back
//! once it concludes. Records are immutable once pushed.

use crate::ids::CharacterId;
use crate::value_objects::BattleSnapshot;

/// One damage exchange from attacker to defender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub attacker_name: String,
    pub defender_name: String,
    pub damage_dealt: i32,
    pub defender_hp_remaining: i32,
}

/// Turn-order draw plus the one or two turns that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based
    pub round_number: u32,
    pub first_attacker_id: CharacterId,
    pub first_attacker_name: String,
    pub first_attacker_speed: i32,
    pub second_attacker_name: String,
    pub second_attacker_speed: i32,
    /// Second turn is absent when the first one was lethal
    pub turns: Vec<TurnRecord>,
}

/// Final state of a concluded battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: BattleSnapshot,
    pub loser: BattleSnapshot,
    pub log: String,
}
