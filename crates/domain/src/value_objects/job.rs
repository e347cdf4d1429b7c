//! Job value object - the closed set of character classes and their combat formulas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::StatBlock;
use crate::error::DomainError;

/// Character class.
///
/// Each job weights the three base stats differently when deriving
/// `attack_power` and `speed`. Weights are applied in floating point and the
/// sum is floored on every evaluation.
///
/// # Examples
///
/// ```
/// use arena_domain::value_objects::{Job, StatBlock};
///
/// let stats = StatBlock::new(10, 5, 5);
/// assert_eq!(Job::Warrior.attack_power(&stats), 9);
/// assert_eq!(Job::Warrior.speed(&stats), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Warrior,
    Thief,
    Mage,
}

/// Starting health and stats handed out when a character of a job is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProfile {
    pub max_health_points: i32,
    pub stats: StatBlock,
}

impl Job {
    /// All jobs, in declaration order.
    pub const ALL: [Job; 3] = [Job::Warrior, Job::Thief, Job::Mage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Thief => "Thief",
            Self::Mage => "Mage",
        }
    }

    /// Attack modifier for this job.
    ///
    /// | Job | Formula |
    /// |---|---|
    /// | Warrior | `0.8*STR + 0.2*DEX` |
    /// | Thief | `0.25*STR + 1.0*DEX + 0.25*INT` |
    /// | Mage | `0.2*STR + 0.2*DEX + 1.2*INT` |
    pub fn attack_power(&self, stats: &StatBlock) -> i32 {
        let value = match self {
            Self::Warrior => stats.str_f64() * 0.8 + stats.dex_f64() * 0.2,
            Self::Thief => {
                stats.str_f64() * 0.25 + stats.dex_f64() * 1.0 + stats.int_f64() * 0.25
            }
            Self::Mage => stats.str_f64() * 0.2 + stats.dex_f64() * 0.2 + stats.int_f64() * 1.2,
        };
        floor_to_i32(value)
    }

    /// Speed modifier for this job.
    ///
    /// | Job | Formula |
    /// |---|---|
    /// | Warrior | `0.6*DEX + 0.2*INT` |
    /// | Thief | `0.8*DEX` |
    /// | Mage | `0.4*DEX + 0.1*STR` |
    pub fn speed(&self, stats: &StatBlock) -> i32 {
        let value = match self {
            Self::Warrior => stats.dex_f64() * 0.6 + stats.int_f64() * 0.2,
            Self::Thief => stats.dex_f64() * 0.8,
            Self::Mage => stats.dex_f64() * 0.4 + stats.str_f64() * 0.1,
        };
        floor_to_i32(value)
    }

    /// Starting profile used by character creation.
    pub fn base_profile(&self) -> JobProfile {
        match self {
            Self::Warrior => JobProfile {
                max_health_points: 20,
                stats: StatBlock::new(10, 5, 5),
            },
            Self::Thief => JobProfile {
                max_health_points: 15,
                stats: StatBlock::new(4, 10, 4),
            },
            Self::Mage => JobProfile {
                max_health_points: 12,
                stats: StatBlock::new(5, 6, 10),
            },
        }
    }
}

// Stats are u32, so the weighted sum is non-negative and bounded well below i32::MAX
// for any realistic stat; saturate anyway.
fn floor_to_i32(value: f64) -> i32 {
    let floored = value.floor();
    if floored >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        floored as i32
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Job {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warrior" => Ok(Self::Warrior),
            "Thief" => Ok(Self::Thief),
            "Mage" => Ok(Self::Mage),
            _ => Err(DomainError::parse(format!(
                "Invalid job type: {}. Job must be one of: Warrior, Thief, or Mage",
                s
            ))),
        }
    }
}
