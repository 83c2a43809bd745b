//! Session history of presented questions

use crate::core::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// Ordered sequence of questions, most recent first.
///
/// The current question is always the first entry. Within a session the
/// engine only prepends newly sourced questions and replaces voted entries
/// in place; nothing is ever removed. The whole value is the explicit
/// engine state passed into and returned from each operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    questions: Vec<Question>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from store rows already ordered most-recent-first.
    pub fn from_most_recent_first(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The question currently being presented, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Prepend a newly sourced question, making it current.
    pub fn adopt(&mut self, question: Question) {
        self.questions.insert(0, question);
    }

    /// Whether any entry carries the given identifier.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions
            .iter()
            .any(|q| q.id.as_ref() == Some(id))
    }

    /// Replace the entry matching `updated`'s identifier.
    ///
    /// An unpersisted question has no identifier to match on; it can only
    /// be the current entry, so that one is replaced instead. Returns
    /// whether a replacement happened.
    pub fn replace(&mut self, updated: Question) -> bool {
        let slot = match &updated.id {
            Some(id) => self
                .questions
                .iter_mut()
                .find(|q| q.id.as_ref() == Some(id)),
            None => self.questions.first_mut().filter(|q| q.id.is_none()),
        };
        match slot {
            Some(entry) => {
                *entry = updated;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Entries older than the current question, most-recent-first.
    pub fn previous(&self) -> &[Question] {
        self.questions.get(1..).unwrap_or(&[])
    }
}

impl From<Vec<Question>> for History {
    fn from(questions: Vec<Question>) -> Self {
        Self::from_most_recent_first(questions)
    }
}
