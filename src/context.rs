//! Generation context
//!
//! Author and date stamps are injected into the generators as a value
//! object instead of being read from ambient process state, so output is
//! reproducible in tests without environment mocking.

use chrono::Local;

/// Who generated the files, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub author: String,
    pub date: String,
}

impl GenerationContext {
    /// Fixed context for tests and reproducible output.
    pub fn fixed(author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
        }
    }

    /// Context from the current user and today's date.
    pub fn from_env() -> Self {
        let author = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        Self {
            author,
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}
