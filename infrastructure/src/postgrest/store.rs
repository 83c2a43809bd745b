//! HTTP client for the question table.
//!
//! The backing service exposes the `questions` table under `/rest/v1` and
//! a `random_question` SQL function under `/rest/v1/rpc` so pseudo-random
//! selection happens at the query level — the engine never downloads the
//! table to sample locally.

use super::records::{NewQuestionRow, QuestionRow, VoteUpdate};
use async_trait::async_trait;
use eller_application::{QuestionStore, StoreError};
use eller_domain::{Question, QuestionId};
use tracing::debug;

/// Environment variable carrying the project base URL.
pub const STORE_URL_ENV: &str = "ELLER_STORE_URL";
/// Environment variable carrying the API key.
pub const STORE_KEY_ENV: &str = "ELLER_STORE_KEY";

const TABLE: &str = "questions";
const RANDOM_RPC: &str = "random_question";

/// Question store backed by a PostgREST-style REST API (Supabase dialect:
/// `apikey` header plus bearer authorization).
pub struct PostgrestQuestionStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestQuestionStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read base URL and API key from [`STORE_URL_ENV`] / [`STORE_KEY_ENV`].
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = std::env::var(STORE_URL_ENV)
            .map_err(|_| StoreError::MissingCredential(STORE_URL_ENV))?;
        let api_key = std::env::var(STORE_KEY_ENV)
            .map_err(|_| StoreError::MissingCredential(STORE_KEY_ENV))?;
        Ok(Self::new(base_url, api_key))
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), TABLE)
    }

    fn rpc_url(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            RANDOM_RPC
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Map a non-success status into a [`StoreError::RequestFailed`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::RequestFailed {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl QuestionStore for PostgrestQuestionStore {
    async fn load_all(&self) -> Result<Vec<Question>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let rows: Vec<QuestionRow> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::MalformedRecord(e.to_string()))?;

        debug!(count = rows.len(), "Loaded question rows");
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn fetch_random(&self) -> Result<Option<Question>, StoreError> {
        let response = self
            .authed(self.client.post(self.rpc_url()))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        // The RPC returns a set; an empty store yields an empty array.
        let rows: Vec<QuestionRow> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::MalformedRecord(e.to_string()))?;

        Ok(rows.into_iter().next().map(Question::from))
    }

    async fn insert(&self, option1: &str, option2: &str) -> Result<Question, StoreError> {
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[NewQuestionRow::new(option1, option2)])
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let mut rows: Vec<QuestionRow> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::MalformedRecord(e.to_string()))?;

        if rows.is_empty() {
            return Err(StoreError::MalformedRecord(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(Question::from(rows.remove(0)))
    }

    async fn update_votes(
        &self,
        id: &QuestionId,
        votes1: u64,
        votes2: u64,
    ) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&VoteUpdate { votes1, votes2 })
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        Self::check(response).await?;
        debug!(%id, votes1, votes2, "Persisted vote counters");
        Ok(())
    }
}
