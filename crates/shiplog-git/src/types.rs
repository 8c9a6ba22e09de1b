//! Git types

use serde::{Deserialize, Serialize};

/// Subject used for commits whose message is empty
pub const NO_MESSAGE: &str = "(no message)";

/// A commit as read from the log, before any parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Abbreviated commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// Author name
    pub author: String,
    /// Author date as `YYYY-MM-DD`
    pub date: String,
}

impl RawCommit {
    /// Create a new RawCommit
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            author: author.into(),
            date: date.into(),
        }
    }
}
