//! Domain layer for antingen-eller
//!
//! Core entities and pure logic for the would-you-rather engine: the
//! [`Question`] record with its two vote counters, the session [`History`],
//! derived [`VoteTally`] statistics and the completion-text parser that
//! turns free-form generated text into a displayable two-option pair.
//!
//! This crate has no I/O and no presentation concerns. Side effects
//! (generation service, backing store) live behind ports in the
//! application layer.

pub mod core;
pub mod history;
pub mod parsing;

// Re-export commonly used types
pub use self::core::{
    choice::Choice,
    error::DomainError,
    question::{Question, QuestionId},
    tally::{VoteTally, percentage},
};
pub use history::History;
pub use parsing::{
    AlternativePair, OPTION1_PLACEHOLDER, OPTION2_PLACEHOLDER, parse_alternatives,
};
