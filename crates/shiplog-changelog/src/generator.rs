//! Changelog generation

use std::path::Path;

use chrono::NaiveDate;
use shiplog_core::config::ChangelogConfig;
use shiplog_core::error::Result;
use shiplog_git::{CommitSource, RawCommit};
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::merger::{merge_file, MergeReport};
use crate::parser::{CommitParser, ConventionalParser};
use crate::types::{Category, ChangelogEntry, Group, ParsedCommit};

/// Commits collected since the last tag, ready to be written
#[derive(Debug, Clone)]
pub struct Release {
    /// Tag the range starts after, `None` for the whole history
    pub tag: Option<String>,
    /// Grouped commits
    pub entry: ChangelogEntry,
}

impl Release {
    /// Number of commits in the range
    pub fn commit_count(&self) -> usize {
        self.entry.commit_count()
    }
}

/// Result of [`ChangelogGenerator::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No commits since the last tag; the file was not touched
    NothingToUpdate,
    /// The changelog file was rewritten
    Updated(MergeReport),
}

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and formatter
    pub fn new(config: ChangelogConfig) -> Self {
        let formatter = MarkdownFormatter::new().with_hashes(config.include_hashes);
        Self {
            parser: Box::new(ConventionalParser::new()),
            formatter: Box::new(formatter),
            config,
        }
    }

    /// Parse and group commits into an entry dated `date`.
    ///
    /// Groups follow [`Category::SECTION_ORDER`]; inside a group commits keep
    /// their input order.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, commits: &[RawCommit], date: NaiveDate) -> ChangelogEntry {
        let parsed: Vec<ParsedCommit> = commits.iter().map(|c| self.parser.parse(c)).collect();

        let mut entry = ChangelogEntry::unreleased(date);
        for category in Category::SECTION_ORDER {
            let mut group = Group::new(category);
            group.commits = parsed
                .iter()
                .filter(|c| c.category() == category)
                .cloned()
                .collect();
            entry.add_group(group);
        }

        debug!(group_count = entry.groups.len(), "changelog groups built");
        entry
    }

    /// Format a changelog entry to string
    pub fn format(&self, entry: &ChangelogEntry) -> String {
        self.formatter.format(entry)
    }

    /// Generate and format in one step
    pub fn render(&self, commits: &[RawCommit], date: NaiveDate) -> String {
        let entry = self.generate(commits, date);
        self.format(&entry)
    }

    /// Read the latest tag and the commits after it from `source`
    #[instrument(skip(self, source))]
    pub fn prepare(&self, source: &dyn CommitSource, date: NaiveDate) -> Result<Release> {
        let tag = source.latest_tag()?;
        info!(tag = ?tag, "resolved last release tag");

        let commits = source.commits_since(tag.as_deref())?;
        info!(commit_count = commits.len(), "collected commits since last tag");

        Ok(Release {
            entry: self.generate(&commits, date),
            tag,
        })
    }

    /// Merge a prepared release into the changelog at `path`.
    ///
    /// Releases without commits leave the file untouched.
    #[instrument(skip(self, release), fields(path = %path.display()))]
    pub fn write(&self, release: &Release, path: &Path) -> Result<UpdateOutcome> {
        if release.entry.is_empty() {
            info!("no commits since last tag, nothing to update");
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        let section = self.format(&release.entry);
        let report = merge_file(path, &section, &self.config)?;
        Ok(UpdateOutcome::Updated(report))
    }

    /// Run the whole pipeline: collect, render and merge into `path`
    pub fn update(
        &self,
        source: &dyn CommitSource,
        path: &Path,
        date: NaiveDate,
    ) -> Result<UpdateOutcome> {
        let release = self.prepare(source, date)?;
        self.write(&release, path)
    }
}
