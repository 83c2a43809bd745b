//! Load History use case.
//!
//! Rehydrates the session history from the backing store at session start.
//! A read failure is surfaced so the presentation layer can render a
//! "no question available" state with a manual create action; it is never
//! retried automatically.

use crate::ports::question_store::{QuestionStore, StoreError};
use eller_domain::History;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during rehydration.
#[derive(Error, Debug)]
pub enum LoadHistoryError {
    #[error("Store read failed: {0}")]
    StoreRead(#[from] StoreError),
}

/// Use case for loading the question history at session start.
pub struct LoadHistoryUseCase {
    store: Arc<dyn QuestionStore>,
}

impl LoadHistoryUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Load all stored questions, most recent first. The most recent one
    /// becomes the current question; an empty store yields an empty
    /// history, which is not an error.
    pub async fn execute(&self) -> Result<History, LoadHistoryError> {
        let rows = self.store.load_all().await?;
        info!(count = rows.len(), "Rehydrated question history");
        Ok(History::from_most_recent_first(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eller_domain::{Question, QuestionId};

    struct MockStore {
        rows: Result<Vec<Question>, ()>,
    }

    #[async_trait]
    impl QuestionStore for MockStore {
        async fn load_all(&self) -> Result<Vec<Question>, StoreError> {
            match &self.rows {
                Ok(rows) => Ok(rows.clone()),
                Err(()) => Err(StoreError::ConnectionError("unreachable".to_string())),
            }
        }

        async fn fetch_random(&self) -> Result<Option<Question>, StoreError> {
            unimplemented!("not used by LoadHistory")
        }

        async fn insert(&self, _: &str, _: &str) -> Result<Question, StoreError> {
            unimplemented!("not used by LoadHistory")
        }

        async fn update_votes(&self, _: &QuestionId, _: u64, _: u64) -> Result<(), StoreError> {
            unimplemented!("not used by LoadHistory")
        }
    }

    fn question(id: &str) -> Question {
        let mut q = Question::unsaved("a", "b");
        q.id = Some(QuestionId::new(id));
        q
    }

    #[tokio::test]
    async fn test_rehydrates_most_recent_first() {
        let store = MockStore {
            rows: Ok(vec![question("newest"), question("older")]),
        };
        let history = LoadHistoryUseCase::new(Arc::new(store))
            .execute()
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current().unwrap().id,
            Some(QuestionId::new("newest"))
        );
    }

    #[tokio::test]
    async fn test_empty_store_is_not_an_error() {
        let store = MockStore { rows: Ok(vec![]) };
        let history = LoadHistoryUseCase::new(Arc::new(store))
            .execute()
            .await
            .unwrap();

        assert!(history.is_empty());
        assert!(history.current().is_none());
    }

    #[tokio::test]
    async fn test_read_failure_is_surfaced() {
        let store = MockStore { rows: Err(()) };
        let result = LoadHistoryUseCase::new(Arc::new(store)).execute().await;

        assert!(matches!(
            result.unwrap_err(),
            LoadHistoryError::StoreRead(StoreError::ConnectionError(_))
        ));
    }
}
