//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

/// Outcome of applying damage to a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Character was already at 0 HP, no effect
    AlreadyDead,
    /// Character took damage but survived
    Wounded { damage_dealt: i32, remaining_hp: i32 },
    /// Character was brought to 0 HP by this damage
    Killed { damage_dealt: i32 },
}
