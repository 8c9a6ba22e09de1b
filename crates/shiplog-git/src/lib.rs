//! Shiplog Git - Commit history for changelog generation
//!
//! This crate reads the latest release tag and the commits made since it,
//! either from a git repository or from any other [`CommitSource`].

mod commits;
mod repository;
mod source;
mod tags;
pub mod types;

#[cfg(test)]
mod testing;

pub use repository::{GitRepo, Result};
pub use source::CommitSource;
pub use types::RawCommit;
