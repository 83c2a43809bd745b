//! Question entity and identifier

use crate::core::choice::Choice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the backing store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        QuestionId::new(s)
    }
}

/// A two-option question with its running vote counters.
///
/// `id` and `created_at` are assigned by the backing store; both are `None`
/// for a question that has not been persisted. Counters only ever grow, and
/// only through [`Question::with_vote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<QuestionId>,
    pub option1: String,
    pub option2: String,
    pub votes1: u64,
    pub votes2: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Create an unpersisted question with zero counters.
    pub fn unsaved(option1: impl Into<String>, option2: impl Into<String>) -> Self {
        Self {
            id: None,
            option1: option1.into(),
            option2: option2.into(),
            votes1: 0,
            votes2: 0,
            created_at: None,
        }
    }

    /// Whether the store has assigned this question an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn total_votes(&self) -> u64 {
        self.votes1 + self.votes2
    }

    /// Copy of this question with exactly one counter incremented by 1.
    ///
    /// Identifier, options, timestamp and the other counter are untouched.
    /// This is the only way counters change.
    pub fn with_vote(&self, choice: Choice) -> Self {
        let mut updated = self.clone();
        match choice {
            Choice::First => updated.votes1 += 1,
            Choice::Second => updated.votes2 += 1,
        }
        updated
    }
}
