//! Tag operations

use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode};
use tracing::{debug, instrument, warn};

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Find the nearest tag reachable from HEAD, like
    /// `git describe --tags --abbrev=0`.
    ///
    /// A repository without any reachable tag yields `Ok(None)`.
    #[instrument(skip(self))]
    pub fn describe_latest_tag(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!("no tags reachable from HEAD");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "could not describe HEAD, treating history as untagged");
                return Ok(None);
            }
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let name = describe.format(Some(&format))?;

        debug!(tag = %name, "found latest tag");
        Ok(Some(name))
    }
}
