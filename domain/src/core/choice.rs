//! The two sides a voter can pick

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the two options of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// The option the voter did not pick.
    pub fn other(self) -> Self {
        match self {
            Choice::First => Choice::Second,
            Choice::Second => Choice::First,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::First => write!(f, "1"),
            Choice::Second => write!(f, "2"),
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "option1" => Ok(Choice::First),
            "2" | "option2" => Ok(Choice::Second),
            other => Err(DomainError::InvalidChoice(other.to_string())),
        }
    }
}
