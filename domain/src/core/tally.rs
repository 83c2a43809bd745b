//! Derived vote statistics

use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Percentage split of a question's two counters.
///
/// Derived on every render, never persisted. Both sides are `0` when the
/// question has no votes yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub percentage1: u8,
    pub percentage2: u8,
}

impl VoteTally {
    pub fn for_question(question: &Question) -> Self {
        let total = question.total_votes();
        Self {
            percentage1: percentage(question.votes1, total),
            percentage2: percentage(question.votes2, total),
        }
    }
}

/// Rounded share of `count` in `total`, as a whole percentage.
///
/// Zero when `total` is zero. Rounds half away from zero (`f64::round`):
/// 1 of 8 votes is 13%, not 12%. The two sides of a tally are rounded
/// independently, so their sum can differ from 100 — an accepted display
/// approximation, not something to correct for.
pub fn percentage(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u8
}
