//! Commit history operations

use chrono::{FixedOffset, TimeZone};
use git2::{ErrorCode, Oid, Sort};
use tracing::{debug, instrument};

use shiplog_core::error::GitError;

use crate::repository::{GitRepo, Result};
use crate::types::{RawCommit, NO_MESSAGE};

impl GitRepo {
    /// Get the commits reachable from HEAD but not from `tag`
    #[instrument(skip(self))]
    pub fn commits_since_tag(&self, tag: &str) -> Result<Vec<RawCommit>> {
        let since = self.resolve_tag(tag)?;
        self.walk_from_head(Some(since))
    }

    /// Get all commits reachable from HEAD
    #[instrument(skip(self))]
    pub fn all_commits(&self) -> Result<Vec<RawCommit>> {
        self.walk_from_head(None)
    }

    /// Resolve a tag name (lightweight or annotated) to its commit
    fn resolve_tag(&self, tag: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag))
            .map_err(|e| {
                if e.code() == ErrorCode::NotFound {
                    GitError::TagNotFound(tag.to_string())
                } else {
                    GitError::Git2(e)
                }
            })?;
        Ok(object.peel_to_commit()?.id())
    }

    fn walk_from_head(&self, hide: Option<Oid>) -> Result<Vec<RawCommit>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        if let Some(oid) = hide {
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_raw(&commit)?);
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }
}

/// Convert a git2 Commit to a RawCommit
fn commit_to_raw(commit: &git2::Commit<'_>) -> Result<RawCommit> {
    let short_id = commit.as_object().short_id()?;
    let hash = short_id
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| commit.id().to_string().chars().take(7).collect());

    let subject = subject_line(&String::from_utf8_lossy(commit.message_bytes()));
    let subject = if subject.is_empty() {
        NO_MESSAGE.to_string()
    } else {
        subject
    };

    let author = commit.author();
    let date = format_date(author.when()).ok_or_else(|| GitError::InvalidTimestamp {
        commit: hash.clone(),
        seconds: author.when().seconds(),
    })?;

    Ok(RawCommit::new(
        hash,
        subject,
        author.name().unwrap_or("Unknown"),
        date,
    ))
}

/// First paragraph of a message joined into one line, like `%s`.
///
/// Leading blank lines are skipped; indentation of the subject is kept.
fn subject_line(message: &str) -> String {
    message
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Calendar date of a git timestamp in its own offset, like `--date=short`
fn format_date(time: git2::Time) -> Option<String> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)?;
    let datetime = offset.timestamp_opt(time.seconds(), 0).single()?;
    Some(datetime.date_naive().format("%Y-%m-%d").to_string())
}
