//! Next Question use case — the sourcing engine.
//!
//! Decides whether to reuse a previously stored question or synthesize a
//! new one, and returns the updated session state. Every path ends with a
//! new current question at the head of the history; the operation is
//! infallible by construction (generation failures degrade to a fallback
//! pair, store failures degrade to an unpersisted question).

use crate::params::SourcingParams;
use crate::ports::question_store::QuestionStore;
use crate::ports::random_source::RandomSource;
use crate::use_cases::generate_question::GenerateQuestionUseCase;
use eller_domain::{History, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the new current question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    /// Drawn from previously stored questions.
    Reused,
    /// Freshly generated and persisted with zero counters.
    Generated,
    /// Freshly generated but left unpersisted — a degraded generation
    /// result, or an insert that failed. Votes on it stay display-only.
    GeneratedUnpersisted,
}

/// Result of sourcing the next question.
#[derive(Debug)]
pub struct NextQuestionOutcome {
    /// Updated session state; the new question is `history[0]`.
    pub history: History,
    pub source: QuestionSource,
}

/// Use case for sourcing the next question to present.
pub struct NextQuestionUseCase {
    store: Arc<dyn QuestionStore>,
    generator: GenerateQuestionUseCase,
    random: Arc<dyn RandomSource>,
    params: SourcingParams,
}

impl NextQuestionUseCase {
    pub fn new(
        store: Arc<dyn QuestionStore>,
        generator: GenerateQuestionUseCase,
        random: Arc<dyn RandomSource>,
        params: SourcingParams,
    ) -> Self {
        Self {
            store,
            generator,
            random,
            params,
        }
    }

    /// Source the next question and prepend it to the history.
    pub async fn execute(&self, mut history: History) -> NextQuestionOutcome {
        let roll = self.random.roll();
        if roll < self.params.reuse_probability {
            debug!(roll, "Sourcing decision: attempt reuse");
            if let Some(question) = self.try_reuse(&history).await {
                info!(id = ?question.id, "Reusing stored question");
                history.adopt(question);
                return NextQuestionOutcome {
                    history,
                    source: QuestionSource::Reused,
                };
            }
        } else {
            debug!(roll, "Sourcing decision: generate");
        }
        self.generate_into(history).await
    }

    /// Up to `max_reuse_attempts` random draws from the store, rejecting
    /// every identifier already shown this session. A store error or an
    /// empty store counts as a failed attempt.
    async fn try_reuse(&self, history: &History) -> Option<Question> {
        for attempt in 1..=self.params.max_reuse_attempts {
            match self.store.fetch_random().await {
                Ok(Some(candidate)) => match &candidate.id {
                    Some(id) if history.contains(id) => {
                        debug!(%id, attempt, "Reuse candidate already shown, rejecting");
                    }
                    _ => return Some(candidate),
                },
                Ok(None) => {
                    debug!(attempt, "Store has no questions to reuse");
                }
                Err(e) => {
                    warn!(attempt, "Random fetch failed: {}", e);
                }
            }
        }
        debug!("Reuse attempts exhausted, falling back to generation");
        None
    }

    async fn generate_into(&self, mut history: History) -> NextQuestionOutcome {
        let generated = self.generator.execute().await;

        if generated.degraded {
            // Transport-failure fallback pair: display it, but keep it out
            // of the store so it never enters the reuse pool.
            history.adopt(Question::unsaved(generated.option1, generated.option2));
            return NextQuestionOutcome {
                history,
                source: QuestionSource::GeneratedUnpersisted,
            };
        }

        match self
            .store
            .insert(&generated.option1, &generated.option2)
            .await
        {
            Ok(question) => {
                info!(id = ?question.id, "Persisted generated question");
                history.adopt(question);
                NextQuestionOutcome {
                    history,
                    source: QuestionSource::Generated,
                }
            }
            Err(e) => {
                // Write failures never roll back the in-memory state
                warn!("Insert failed, adopting question unpersisted: {}", e);
                history.adopt(Question::unsaved(generated.option1, generated.option2));
                NextQuestionOutcome {
                    history,
                    source: QuestionSource::GeneratedUnpersisted,
                }
            }
        }
    }
}
