//! Blocking oracle client for an OpenAI-compatible chat API.
//!
//! Works with any server implementing the chat completions endpoint:
//! Ollama (`http://localhost:11434/v1`), llama.cpp server, vLLM, etc.
//! The call is a blocking round-trip with a hard timeout; a hung endpoint
//! surfaces as [`Error::OracleUnavailable`] and the grading attempt fails
//! without touching card state.

use super::{Grading, GradingOracle, parse_grading};
use crate::error::{Error, Result};
use std::time::Duration;
use tracing::debug;

const GRADING_SYSTEM_PROMPT: &str = "We are doing a game of spaced repetition to learn concepts. \
    The user will try to answer questions and you need to check if the answer is right and \
    explain what is the answer if it is wrong. Start by writing 'score: ' and then a score \
    to the answer between 0 and 10, where 10 is a completely right and detailed answer.";

const HINT_SYSTEM_PROMPT: &str = "We are doing a game of spaced repetition to learn concepts. \
    Give a short hint for the question without revealing the full answer.";

pub struct OllamaOracle {
    agent: ureq::Agent,
    base_url: String,
    model: String,
}

impl OllamaOracle {
    /// Creates a client for `base_url` (e.g. `http://localhost:11434/v1`)
    /// and `model` (e.g. `llama3.2`).
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    /// One chat completion round-trip; returns the assistant message text.
    fn chat(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "stream": false,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });

        debug!(%url, model = %self.model, "querying grading oracle");

        let response = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(|e| Error::OracleUnavailable(e.to_string()))?;

        let reply: serde_json::Value = response
            .into_json()
            .map_err(|e| Error::OracleUnavailable(e.to_string()))?;

        reply["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::OracleUnavailable("response carried no message content".to_string())
            })
    }
}

impl GradingOracle for OllamaOracle {
    fn grade(&self, question: &str, answer: &str) -> Result<Grading> {
        let prompt = format!("Question to answer: '{question}'. User answer: '{answer}'");
        let reply = self.chat(GRADING_SYSTEM_PROMPT, &prompt)?;
        parse_grading(&reply)
    }

    fn hint(&self, question: &str) -> Result<String> {
        let prompt = format!("Give a hint for this question: '{question}'");
        self.chat(HINT_SYSTEM_PROMPT, &prompt)
    }
}
