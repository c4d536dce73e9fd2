pub mod error;
pub mod models;
pub mod oracle;
pub mod store;

pub use error::{Error, Result};
pub use models::{Card, PracticeSession};
pub use oracle::{Grading, GradingOracle, OllamaOracle};
