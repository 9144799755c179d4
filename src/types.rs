//! Core types shared across the catalog pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completeness tag carried in folder names as `[V]`, `[A]` or `[P]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// `[V]`: complete
    #[serde(rename = "V")]
    Complete,
    /// `[A]`: incomplete
    #[serde(rename = "A")]
    Incomplete,
    /// `[P]`: absent
    #[serde(rename = "P")]
    Absent,
}

impl Status {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'V' => Some(Status::Complete),
            'A' => Some(Status::Incomplete),
            'P' => Some(Status::Absent),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Status::Complete => 'V',
            Status::Incomplete => 'A',
            Status::Absent => 'P',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// First 8 hex characters of the catalog content digest.
pub type ContentHash = String;

/// Join path segments POSIX-style regardless of host platform.
pub fn join_posix(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", parent, child)
    }
}
