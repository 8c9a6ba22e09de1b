//! Repository fixtures for tests

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

use crate::repository::GitRepo;

/// 2024-01-15T12:00:00Z
pub(crate) const BASE_TIME: i64 = 1_705_320_000;

pub(crate) fn init() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    (temp, repo)
}

/// Commit an empty tree change on HEAD with the given author time
pub(crate) fn commit_at(repo: &Repository, message: &str, seconds: i64, offset_minutes: i32) -> Oid {
    let sig = Signature::new("Test Author", "test@example.com", &Time::new(seconds, offset_minutes))
        .unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Commit at successive minutes after [`BASE_TIME`]
pub(crate) fn commit(repo: &Repository, message: &str) -> Oid {
    let count = repo
        .head()
        .ok()
        .and_then(|_| {
            let mut walk = repo.revwalk().ok()?;
            walk.push_head().ok()?;
            Some(walk.count() as i64)
        })
        .unwrap_or(0);
    commit_at(repo, message, BASE_TIME + count * 60, 0)
}

pub(crate) fn lightweight_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

pub(crate) fn annotated_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    let sig = Signature::now("Tagger", "tagger@example.com").unwrap();
    repo.tag(name, &object, &sig, "release", false).unwrap();
}

pub(crate) fn open(temp: &TempDir) -> GitRepo {
    GitRepo::open(temp.path()).unwrap()
}
