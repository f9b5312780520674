use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite key that unifies the same logical item across users.
///
/// Items are matched on the title and production year reported by the media
/// server, never on external catalog ids. Two different items that share a
/// title and both lack a year map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub title: String,
    pub year: Option<u32>,
}

impl ItemKey {
    pub fn new(title: &str, year: Option<u32>) -> Self {
        Self {
            title: title.trim().to_string(),
            year,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}
