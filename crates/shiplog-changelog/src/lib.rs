//! Shiplog Changelog - Changelog generation from conventional commits
//!
//! This crate parses commit subjects, groups them into categories, renders
//! a dated markdown section and merges it into an existing changelog file.

pub mod formatter;
pub mod generator;
pub mod merger;
pub mod parser;
pub mod types;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::{ChangelogGenerator, Release, UpdateOutcome};
pub use merger::{merge_file, ChangelogDocument, MergeReport};
pub use parser::{CommitParser, ConventionalParser};
pub use types::{Category, ChangelogEntry, Group, ParsedCommit};
