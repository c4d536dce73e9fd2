//! A practice session on one topic.
//!
//! Owns the loaded cards, the transient last-shown marker and a reference to
//! the grading oracle. Single-threaded by design: load, select, grade and
//! save run to completion one after another, and the marker dies with the
//! session (it is never persisted).

use super::Card;
use super::review::apply_grade;
use super::selector::select_next;
use crate::error::{Error, Result};
use crate::oracle::GradingOracle;
use crate::store::{load_topic, save_topic};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

pub struct PracticeSession<'a> {
    topic_path: PathBuf,
    cards: Vec<Card>,
    last_shown: Option<String>,
    oracle: &'a dyn GradingOracle,
}

impl<'a> PracticeSession<'a> {
    /// Opens a session on the topic file at `topic_path`. A missing file
    /// starts an empty session.
    pub fn open(topic_path: impl Into<PathBuf>, oracle: &'a dyn GradingOracle) -> Result<Self> {
        let topic_path = topic_path.into();
        let cards = load_topic(&topic_path)?;

        Ok(Self {
            topic_path,
            cards,
            last_shown: None,
            oracle,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Picks the most urgent card that was not shown last, records it as
    /// shown, and returns it. `None` when the topic is empty or the only
    /// card is the one just shown.
    pub fn next_question(&mut self, now: DateTime<Utc>) -> Option<&Card> {
        let question = select_next(&self.cards, now, self.last_shown.as_deref())
            .map(|card| card.question.clone())?;

        self.last_shown = Some(question.clone());
        self.cards.iter().find(|c| c.question == question)
    }

    /// Grades `answer` against the card holding `question`: asks the
    /// oracle, applies the score/interval transition, stamps the card and
    /// persists the whole topic. Returns the oracle's feedback text.
    ///
    /// Any oracle, parse or lookup failure surfaces before the card is
    /// touched, so a failed attempt leaves both memory and file unchanged.
    pub fn grade_answer(
        &mut self,
        question: &str,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let grading = self.oracle.grade(question, answer)?;

        let card = self
            .cards
            .iter_mut()
            .find(|c| c.question == question)
            .ok_or_else(|| Error::UnknownCard {
                question: question.to_string(),
            })?;

        apply_grade(card, grading.score, now);
        info!(
            question,
            oracle_score = grading.score,
            new_score = card.score,
            new_interval = card.interval,
            "graded answer"
        );

        self.last_shown = Some(question.to_string());
        save_topic(&self.cards, &self.topic_path)?;

        Ok(grading.feedback)
    }

    /// Asks the oracle for a hint. No scheduling effect.
    pub fn hint(&self, question: &str) -> Result<String> {
        self.oracle.hint(question)
    }
}
