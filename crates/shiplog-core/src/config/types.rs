//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for shiplog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// Text of the top-level `# ` header
    pub title: String,

    /// Paragraph written under the header when the file is created
    pub description: String,

    /// Whether to append the short commit hash to each entry
    pub include_hashes: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            title: "Changelog".to_string(),
            description: "All notable changes to this project will be documented in this file."
                .to_string(),
            include_hashes: true,
        }
    }
}

impl ChangelogConfig {
    /// The top-level header line, without a trailing newline
    pub fn header_line(&self) -> String {
        format!("# {}", self.title)
    }
}
