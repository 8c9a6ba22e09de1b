//! Merging a rendered section into a changelog file
//!
//! A changelog is treated as an optional leading header block followed by a
//! body. The header block runs from a top-level `# <title>` line at the very
//! start of the file up to and including the first blank line. New sections
//! go between the header block and the body, so everything after the header
//! block keeps its exact bytes. Files that do not start with the header get
//! the new section prepended.

use std::path::{Path, PathBuf};

use shiplog_core::config::ChangelogConfig;
use shiplog_core::error::{ChangelogError, Result};
use tracing::{debug, info, instrument, warn};

/// A changelog split at the end of its leading header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    preamble: Option<String>,
    body: String,
}

impl ChangelogDocument {
    /// Split `content` after the header block introduced by `header_line`
    pub fn parse(content: &str, header_line: &str) -> Self {
        if content.starts_with(header_line) {
            if let Some(blank) = content.find("\n\n") {
                let (preamble, body) = content.split_at(blank + 2);
                return Self {
                    preamble: Some(preamble.to_string()),
                    body: body.to_string(),
                };
            }
        }

        Self {
            preamble: None,
            body: content.to_string(),
        }
    }

    /// Content written when no changelog exists yet
    pub fn default_content(config: &ChangelogConfig) -> String {
        format!("{}\n\n{}\n\n", config.header_line(), config.description)
    }

    /// The header block, if the document has one
    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }

    /// Whether `line` occurs anywhere in the document
    pub fn contains(&self, line: &str) -> bool {
        self.render().contains(line)
    }

    /// Insert a rendered section right after the header block
    pub fn insert_section(&mut self, section: &str) {
        let mut body = String::with_capacity(section.len() + self.body.len());
        body.push_str(section);
        body.push_str(&self.body);
        self.body = body;
    }

    /// Reassemble the document
    pub fn render(&self) -> String {
        let mut output = String::new();
        if let Some(preamble) = &self.preamble {
            output.push_str(preamble);
        }
        output.push_str(&self.body);
        output
    }
}

/// What [`merge_file`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// File that was written
    pub path: PathBuf,
    /// The file did not exist before
    pub created: bool,
    /// The section heading was already present in the file
    pub duplicate: bool,
}

/// Merge a rendered section into the changelog at `path`, rewriting the file.
///
/// A missing file starts from [`ChangelogDocument::default_content`]. If the
/// section's heading line already appears in the file a warning is logged and
/// reported, but the section is inserted anyway.
#[instrument(skip(section, config), fields(path = %path.display()))]
pub fn merge_file(path: &Path, section: &str, config: &ChangelogConfig) -> Result<MergeReport> {
    let created = !path.exists();

    let content = if created {
        debug!("changelog does not exist, starting from default header");
        ChangelogDocument::default_content(config)
    } else {
        std::fs::read_to_string(path).map_err(|source| ChangelogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?
    };

    let mut document = ChangelogDocument::parse(&content, &config.header_line());
    if document.preamble().is_none() {
        debug!("no leading header block, prepending section");
    }

    let heading = section.lines().next().unwrap_or_default();
    let duplicate = !heading.is_empty() && document.contains(heading);
    if duplicate {
        warn!(heading, "changelog already has an entry with this heading");
    }

    document.insert_section(section);

    std::fs::write(path, document.render()).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    info!(created, duplicate, "changelog written");
    Ok(MergeReport {
        path: path.to_path_buf(),
        created,
        duplicate,
    })
}
