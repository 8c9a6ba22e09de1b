//! Commit parsing

mod conventional;

pub use conventional::ConventionalParser;

use crate::types::ParsedCommit;
use shiplog_git::RawCommit;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a commit into a structured format. Never fails: subjects the
    /// parser does not understand become `other` commits.
    fn parse(&self, commit: &RawCommit) -> ParsedCommit;
}
