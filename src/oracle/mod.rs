//! Grading oracle boundary.
//!
//! The oracle is an external collaborator: given a question and an answer it
//! returns free-form feedback that leads with a numeric grade. This module
//! pins down the contract the scheduler needs — a [`GradingOracle`] trait
//! plus a single parse step that turns a raw reply into a structured
//! [`Grading`] — so the rest of the crate never touches reply text.

pub mod ollama;

pub use ollama::OllamaOracle;

use crate::error::{Error, Result};

/// Structured grading outcome, parsed once at the oracle boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grading {
    /// Grade 0..=10, where 10 is a fully correct, detailed answer.
    pub score: u8,
    /// The oracle's raw feedback text, for display to the learner.
    pub feedback: String,
}

/// External service that evaluates free-text answers.
///
/// Implementations are injected into the session explicitly; there is no
/// ambient global instance.
pub trait GradingOracle {
    /// Grades `answer` against `question`.
    fn grade(&self, question: &str, answer: &str) -> Result<Grading>;

    /// Asks for a hint on `question`. No effect on scheduling state.
    fn hint(&self, question: &str) -> Result<String>;
}

/// Extracts the numeric grade from a raw oracle reply.
///
/// The reply is expected to contain a `score:` marker (any case) followed by
/// an integer. Replies without a parsable marker fail with
/// [`Error::GradingParse`]; values above 10 clamp to 10.
pub fn parse_grading(reply: &str) -> Result<Grading> {
    let lower = reply.to_lowercase();

    let start = lower
        .find("score:")
        .ok_or_else(|| Error::GradingParse {
            reply: reply.to_string(),
        })?
        + "score:".len();

    // Index into the lowercased copy: lowercasing can shift byte offsets
    // relative to the original, and digits survive it unchanged.
    let rest = lower[start..].trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

    let score: u32 = digits.parse().map_err(|_| Error::GradingParse {
        reply: reply.to_string(),
    })?;

    Ok(Grading {
        score: score.min(10) as u8,
        feedback: reply.to_string(),
    })
}
