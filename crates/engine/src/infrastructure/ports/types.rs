//! Shared data types for port boundaries.

use std::fmt;
use std::str::FromStr;

use arena_domain::CharacterId;
use serde::{Deserialize, Serialize};

/// Largest page a caller may ask for.
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Which way to walk from the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDirection {
    #[default]
    Next,
    Previous,
}

impl PageDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Self::Next),
            "previous" => Ok(Self::Previous),
            other => Err(format!(
                "Invalid direction: {other}. Direction must be one of: next, previous"
            )),
        }
    }
}

/// Cursor-based page request over the insertion-ordered character list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<CharacterId>,
    pub limit: u32,
    pub direction: PageDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            limit: DEFAULT_PAGE_LIMIT,
            direction: PageDirection::Next,
        }
    }
}

/// One page of results plus the cursors to move from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<CharacterId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_cursor: Option<CharacterId>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            next_cursor: None,
            previous_cursor: None,
        }
    }

    /// Convert the items, keeping cursors and `has_more`.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            has_more: self.has_more,
            next_cursor: self.next_cursor,
            previous_cursor: self.previous_cursor,
        }
    }
}
