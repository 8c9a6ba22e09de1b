//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::ChangelogEntry;

/// Markdown changelog formatter
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    /// Append `(hash)` to every entry
    pub include_hashes: bool,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            include_hashes: true,
        }
    }

    /// Set whether commit hashes are shown
    pub fn with_hashes(mut self, include: bool) -> Self {
        self.include_hashes = include;
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry), fields(date = %entry.date, group_count = entry.groups.len()))]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut output = String::new();

        output.push_str(&entry.heading());
        output.push_str("\n\n");

        for group in &entry.groups {
            if group.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n", group.category.heading()));

            for commit in &group.commits {
                output.push_str("- ");

                if let Some(scope) = &commit.scope {
                    output.push_str(&format!("**{}:** ", scope));
                }

                output.push_str(&commit.message);

                if self.include_hashes {
                    output.push_str(&format!(" ({})", commit.hash));
                }

                output.push('\n');
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Group, ParsedCommit};
    use chrono::NaiveDate;

    fn commit(commit_type: &str, scope: Option<&str>, message: &str, hash: &str) -> ParsedCommit {
        ParsedCommit {
            commit_type: commit_type.to_string(),
            scope: scope.map(str::to_string),
            message: message.to_string(),
            hash: hash.to_string(),
            author: "Test".to_string(),
            date: "2024-01-15".to_string(),
        }
    }

    fn entry(groups: Vec<Group>) -> ChangelogEntry {
        let mut entry = ChangelogEntry::unreleased(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        for group in groups {
            entry.add_group(group);
        }
        entry
    }

    #[test]
    fn test_format_empty_entry() {
        let output = MarkdownFormatter::new().format(&entry(vec![]));
        assert_eq!(output, "## [Unreleased] - 2024-01-15\n\n");
    }

    #[test]
    fn test_format_with_and_without_scope() {
        let mut features = Group::new(Category::Feat);
        features
            .commits
            .push(commit("feat", Some("auth"), "add login flow", "abc123"));
        features
            .commits
            .push(commit("feat", None, "add logout", "abc456"));

        let output = MarkdownFormatter::new().format(&entry(vec![features]));

        assert_eq!(
            output,
            "## [Unreleased] - 2024-01-15\n\n\
             ### ✨ Features\n\
             - **auth:** add login flow (abc123)\n\
             - add logout (abc456)\n\n"
        );
    }

    #[test]
    fn test_format_other_changes_has_no_emoji() {
        let mut other = Group::new(Category::Other);
        other
            .commits
            .push(commit("other", None, "update readme", "ghi789"));

        let output = MarkdownFormatter::new().format(&entry(vec![other]));
        assert!(output.contains("### Other Changes\n- update readme (ghi789)\n"));
    }

    #[test]
    fn test_format_without_hashes() {
        let mut fixes = Group::new(Category::Fix);
        fixes
            .commits
            .push(commit("fix", None, "crash on null input", "def456"));

        let output = MarkdownFormatter::new()
            .with_hashes(false)
            .format(&entry(vec![fixes]));
        assert!(output.contains("- crash on null input\n"));
        assert!(!output.contains("def456"));
    }
}
