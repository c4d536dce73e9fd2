//! Card is a single learnable question with its scheduling state.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Question text, the card's identity within a topic.
    pub question: String,
    /// Current spacing cadence in days, always >= 1.
    pub interval: u32,
    /// Running proficiency counter, clamped at 0 below.
    pub score: u32,
    /// When the card was last graded; RFC 3339 on disk.
    #[serde(default = "Utc::now")]
    pub last_answered: DateTime<Utc>,
}

impl Card {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            interval: 1,
            score: 0,
            last_answered: Utc::now(),
        }
    }
}
