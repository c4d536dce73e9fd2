//! Priority ranking for card selection.
//!
//! Each card gets an urgency value at evaluation time:
//! - recency factor: whole days since the card was last graded, divided by
//!   its interval — overdue cards rise, long-interval cards rise slowly
//! - knowledge penalty: cards with a score below 3 get an additive boost of
//!   `3 - score`; cards at 3 or above get none
//!
//! Higher priority means more urgent. The formula is deterministic so
//! selection is reproducible for a given clock reading.

use super::Card;
use chrono::{DateTime, Utc};

/// Threshold below which low proficiency boosts a card's urgency.
const PENALTY_CEILING: i64 = 3;

/// Computes the urgency of `card` at instant `now`.
pub fn priority(card: &Card, now: DateTime<Utc>) -> f64 {
    let days_since_answered = (now - card.last_answered).num_days();

    // interval is >= 1 by invariant, so the division is safe
    let recency_factor = days_since_answered as f64 / card.interval as f64;

    let knowledge_penalty = (PENALTY_CEILING - card.score as i64).max(0) as f64;

    recency_factor + knowledge_penalty
}
