//! Conventional Commits subject parser
//!
//! Only the one-line subject is considered: `type(scope): message`. Bodies,
//! footers and breaking-change markers are not part of the grammar.

use regex::Regex;
use std::sync::LazyLock;

use super::CommitParser;
use crate::types::ParsedCommit;
use shiplog_git::types::NO_MESSAGE;
use shiplog_git::RawCommit;

/// Type tag for subjects that do not follow the convention
pub const OTHER_TYPE: &str = "other";

/// `type[(scope)]: message`, with `type` made of ASCII word characters
static SUBJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^)]+)\))?: (?P<message>.+)$")
        .expect("Invalid regex")
});

/// Parser for Conventional Commits subjects
#[derive(Debug, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Split a subject into type, scope and message
    pub fn parse_subject(subject: &str) -> Option<(String, Option<String>, String)> {
        let caps = SUBJECT_REGEX.captures(subject)?;

        let commit_type = caps.name("type")?.as_str().to_string();
        let scope = caps.name("scope").map(|m| m.as_str().to_string());
        let message = caps.name("message")?.as_str().to_string();

        Some((commit_type, scope, message))
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &RawCommit) -> ParsedCommit {
        let (commit_type, scope, message) = Self::parse_subject(&commit.subject)
            .unwrap_or_else(|| {
                let message = if commit.subject.is_empty() {
                    NO_MESSAGE.to_string()
                } else {
                    commit.subject.clone()
                };
                (OTHER_TYPE.to_string(), None, message)
            });

        ParsedCommit {
            commit_type,
            scope,
            message,
            hash: commit.hash.clone(),
            author: commit.author.clone(),
            date: commit.date.clone(),
        }
    }
}
