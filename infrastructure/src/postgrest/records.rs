//! Row types for the question table.

use chrono::{DateTime, Utc};
use eller_domain::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// Primary key as PostgREST returns it — `int8` for serial keys, text for
/// UUID keys. The engine treats both as opaque.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl From<RowId> for QuestionId {
    fn from(id: RowId) -> Self {
        match id {
            RowId::Number(n) => QuestionId::new(n.to_string()),
            RowId::Text(s) => QuestionId::new(s),
        }
    }
}

/// One row of the question table.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRow {
    pub id: RowId,
    pub option1: String,
    pub option2: String,
    #[serde(default)]
    pub votes1: u64,
    #[serde(default)]
    pub votes2: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: Some(row.id.into()),
            option1: row.option1,
            option2: row.option2,
            votes1: row.votes1,
            votes2: row.votes2,
            created_at: row.created_at,
        }
    }
}

/// Insert payload for a new question. Counters start at zero explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct NewQuestionRow<'a> {
    pub option1: &'a str,
    pub option2: &'a str,
    pub votes1: u64,
    pub votes2: u64,
}

impl<'a> NewQuestionRow<'a> {
    pub fn new(option1: &'a str, option2: &'a str) -> Self {
        Self {
            option1,
            option2,
            votes1: 0,
            votes2: 0,
        }
    }
}

/// PATCH payload for a counter update.
#[derive(Debug, Clone, Serialize)]
pub struct VoteUpdate {
    pub votes1: u64,
    pub votes2: u64,
}
