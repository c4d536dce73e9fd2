//! Picks the next card to present.

use super::Card;
use super::priority::priority;
use chrono::{DateTime, Utc};

/// Returns the highest-priority card whose question differs from
/// `last_shown`, or `None` when the topic is empty or the only card is the
/// one just shown. Never re-presents the immediately preceding card.
///
/// Read-only: the caller is responsible for recording the returned card as
/// the new last-shown marker.
pub fn select_next<'a>(
    cards: &'a [Card],
    now: DateTime<Utc>,
    last_shown: Option<&str>,
) -> Option<&'a Card> {
    let mut scored: Vec<(&Card, f64)> = cards.iter().map(|c| (c, priority(c, now))).collect();

    // Stable sort keeps input order among ties.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .map(|(card, _)| card)
        .find(|card| Some(card.question.as_str()) != last_shown)
}
