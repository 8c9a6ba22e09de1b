//! Exit codes for the CLI

use shiplog_core::error::{ConfigError, GitError};
use shiplog_core::ShiplogError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Pick the exit code for a failed command from the first recognised cause
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(error) = cause.downcast_ref::<ShiplogError>() {
            return match error {
                ShiplogError::Config(_) => CONFIG_ERROR,
                ShiplogError::Git(_) => GIT_ERROR,
                _ => ERROR,
            };
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_git_errors() {
        let direct = anyhow::Error::new(GitError::NotARepository(PathBuf::from("/tmp")));
        assert_eq!(for_error(&direct), GIT_ERROR);

        let wrapped = anyhow::Error::new(ShiplogError::from(GitError::NoCommits));
        assert_eq!(for_error(&wrapped), GIT_ERROR);
    }

    #[test]
    fn test_config_errors() {
        let err = anyhow::Error::new(ShiplogError::from(ConfigError::NotFound(PathBuf::from("."))));
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(for_error(&err), ERROR);

        let io = anyhow::Error::new(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(for_error(&io), ERROR);
    }

    #[test]
    fn test_context_is_looked_through() {
        let err = anyhow::Error::new(GitError::NoCommits).context("reading history");
        assert_eq!(for_error(&err), GIT_ERROR);
    }
}
