//! StatBlock value object - the three base stats every character carries.

use serde::{Deserialize, Serialize};

/// Base stats of a character.
///
/// Stats are non-negative by type and never change after creation; combat
/// modifiers are derived from them through the character's [`Job`](super::Job).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
}

impl StatBlock {
    pub fn new(strength: u32, dexterity: u32, intelligence: u32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
        }
    }

    pub(crate) fn str_f64(&self) -> f64 {
        f64::from(self.strength)
    }

    pub(crate) fn dex_f64(&self) -> f64 {
        f64::from(self.dexterity)
    }

    pub(crate) fn int_f64(&self) -> f64 {
        f64::from(self.intelligence)
    }
}
