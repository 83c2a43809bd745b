//! Cast Vote use case — the vote aggregator.
//!
//! Applies a vote to the current question, replaces the matching history
//! entry and dispatches a fire-and-forget persistence task for the two
//! counters. The local state change never waits on persistence: a failed
//! write is logged and accepted as an eventual-consistency gap between the
//! displayed and the persisted counters.

use crate::ports::question_store::QuestionStore;
use eller_domain::{Choice, History};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Errors that can occur when casting a vote.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CastVoteError {
    #[error("No current question to vote on")]
    NoCurrentQuestion,
}

/// Result of casting a vote.
#[derive(Debug)]
pub struct CastVoteOutcome {
    /// Updated session state with the incremented counter in place.
    pub history: History,
    /// Handle of the dispatched persistence task; `None` when the voted
    /// question was never persisted. Best effort: the task logs a failed
    /// write and does not retry. Tests await it to observe the dispatched
    /// intent; the presentation path just drops it.
    pub persistence: Option<JoinHandle<()>>,
}

/// Use case for applying a vote to the current question.
pub struct CastVoteUseCase {
    store: Arc<dyn QuestionStore>,
}

impl CastVoteUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Increment the chosen counter of the current question.
    ///
    /// Must be called from within a Tokio runtime (the persistence task is
    /// spawned onto it). Returns immediately; the updated state is usable
    /// for display regardless of how the write turns out.
    pub fn execute(
        &self,
        mut history: History,
        choice: Choice,
    ) -> Result<CastVoteOutcome, CastVoteError> {
        let current = history.current().ok_or(CastVoteError::NoCurrentQuestion)?;
        let voted = current.with_vote(choice);

        let persistence = voted.id.clone().map(|id| {
            let store = Arc::clone(&self.store);
            let (votes1, votes2) = (voted.votes1, voted.votes2);
            tokio::spawn(async move {
                if let Err(e) = store.update_votes(&id, votes1, votes2).await {
                    warn!(%id, "Vote persistence failed, counters kept in memory only: {}", e);
                }
            })
        });
        if persistence.is_none() {
            debug!("Voted question has no identifier, skipping persistence");
        }

        history.replace(voted);
        Ok(CastVoteOutcome {
            history,
            persistence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::question_store::StoreError;
    use async_trait::async_trait;
    use eller_domain::{Question, QuestionId, VoteTally};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Store that records every counter write and can be told to fail them.
    #[derive(Default)]
    struct RecordingStore {
        updates: Mutex<Vec<(QuestionId, u64, u64)>>,
        fail_updates: bool,
    }

    #[async_trait]
    impl QuestionStore for RecordingStore {
        async fn load_all(&self) -> Result<Vec<Question>, StoreError> {
            Ok(vec![])
        }

        async fn fetch_random(&self) -> Result<Option<Question>, StoreError> {
            Ok(None)
        }

        async fn insert(&self, _: &str, _: &str) -> Result<Question, StoreError> {
            unimplemented!("not used by CastVote")
        }

        async fn update_votes(
            &self,
            id: &QuestionId,
            votes1: u64,
            votes2: u64,
        ) -> Result<(), StoreError> {
            self.updates.lock().unwrap().push((id.clone(), votes1, votes2));
            if self.fail_updates {
                Err(StoreError::ConnectionError("down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn persisted(id: &str, votes1: u64, votes2: u64) -> Question {
        let mut q = Question::unsaved("Pizza", "Tacos");
        q.id = Some(QuestionId::new(id));
        q.votes1 = votes1;
        q.votes2 = votes2;
        q
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_vote_increments_exactly_one_counter() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CastVoteUseCase::new(store.clone());

        let mut history = History::new();
        history.adopt(persisted("q-1", 2, 5));

        let outcome = use_case.execute(history, Choice::First).unwrap();
        let current = outcome.history.current().unwrap();

        assert_eq!(current.votes1, 3);
        assert_eq!(current.votes2, 5);
        assert_eq!(current.id, Some(QuestionId::new("q-1")));
        assert_eq!(current.option1, "Pizza");
        assert_eq!(current.option2, "Tacos");
    }

    #[tokio::test]
    async fn test_vote_dispatches_persistence_of_both_counters() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CastVoteUseCase::new(store.clone());

        let mut history = History::new();
        history.adopt(persisted("q-1", 0, 0));

        let outcome = use_case.execute(history, Choice::Second).unwrap();
        outcome.persistence.unwrap().await.unwrap();

        let updates = store.updates.lock().unwrap();
        assert_eq!(updates.as_slice(), &[(QuestionId::new("q-1"), 0, 1)]);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_incremented_state() {
        let store = Arc::new(RecordingStore {
            fail_updates: true,
            ..Default::default()
        });
        let use_case = CastVoteUseCase::new(store.clone());

        let mut history = History::new();
        history.adopt(persisted("q-1", 9, 0));

        let outcome = use_case.execute(history, Choice::First).unwrap();
        // The write failed, but only after being attempted
        outcome.persistence.unwrap().await.unwrap();

        assert_eq!(store.updates.lock().unwrap().len(), 1);
        let current = outcome.history.current().unwrap();
        assert_eq!(current.votes1, 10);

        // Display statistics reflect the vote immediately
        let tally = VoteTally::for_question(current);
        assert_eq!(tally.percentage1, 100);
    }

    #[tokio::test]
    async fn test_unpersisted_question_skips_persistence() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CastVoteUseCase::new(store.clone());

        let mut history = History::new();
        history.adopt(Question::unsaved("a", "b"));

        let outcome = use_case.execute(history, Choice::First).unwrap();

        assert!(outcome.persistence.is_none());
        assert_eq!(outcome.history.current().unwrap().votes1, 1);
        assert!(store.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_history_is_an_error() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CastVoteUseCase::new(store);

        let result = use_case.execute(History::new(), Choice::First);
        assert_eq!(result.unwrap_err(), CastVoteError::NoCurrentQuestion);
    }

    #[tokio::test]
    async fn test_older_entries_untouched_by_vote() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CastVoteUseCase::new(store);

        let mut history = History::new();
        history.adopt(persisted("old", 4, 4));
        history.adopt(persisted("new", 0, 0));

        let outcome = use_case.execute(history, Choice::Second).unwrap();

        let older = &outcome.history.previous()[0];
        assert_eq!(older.id, Some(QuestionId::new("old")));
        assert_eq!(older.votes1, 4);
        assert_eq!(older.votes2, 4);
    }
}
