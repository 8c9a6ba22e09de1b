//! The seam between the changelog pipeline and version control

use crate::repository::{GitRepo, Result};
use crate::types::RawCommit;

/// Something that can report the last release tag and the commits after it
pub trait CommitSource {
    /// Name of the nearest tag reachable from HEAD, `None` when there is none
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Commits in `(tag, HEAD]`, or every commit reachable from HEAD when
    /// `tag` is `None`. Most recent first.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>>;
}

impl CommitSource for GitRepo {
    fn latest_tag(&self) -> Result<Option<String>> {
        self.describe_latest_tag()
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>> {
        match tag {
            Some(tag) => self.commits_since_tag(tag),
            None => self.all_commits(),
        }
    }
}
