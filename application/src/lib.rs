//! Application layer for antingen-eller
//!
//! Use cases and ports for the question-sourcing and vote-aggregation
//! engine. The ports define how the engine talks to the generation
//! service, the question store and the randomness source; the adapters
//! implementing them live in the infrastructure layer.
//!
//! The engine state is the domain [`History`](eller_domain::History) value
//! passed into and returned from each use case — no hidden globals, no
//! rendering-framework coupling.

pub mod params;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use params::{DEFAULT_PROMPT, GenerationParams, SourcingParams};
pub use ports::{
    generation_gateway::{CompletionRequest, GenerationError, GenerationGateway},
    question_store::{QuestionStore, StoreError},
    random_source::RandomSource,
};
pub use use_cases::{
    cast_vote::{CastVoteError, CastVoteOutcome, CastVoteUseCase},
    generate_question::{
        FALLBACK_OPTION1, FALLBACK_OPTION2, GenerateQuestionUseCase, GeneratedQuestion,
    },
    load_history::{LoadHistoryError, LoadHistoryUseCase},
    next_question::{NextQuestionOutcome, NextQuestionUseCase, QuestionSource},
};
