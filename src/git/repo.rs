// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, PolicyError, Result};
use git2::{Commit, Oid, Repository as Git2Repo, RevparseMode};
use std::path::Path;

/// Wrapper around git2::Repository for reading commit messages.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            PolicyError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                PolicyError::Git(GitError::NotARepository)
            } else {
                PolicyError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            PolicyError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            PolicyError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        Ok(message_of(&commit))
    }

    /// Get commits in a range, newest first.
    ///
    /// Accepts what `git rev-parse` does: `a..b` yields commits reachable
    /// from `b` but not from `a`, `a...b` those reachable from either but
    /// not both, an omitted side means `HEAD`. A single reference yields
    /// that commit only.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let spec = self.inner.revparse(range).map_err(|e| {
            PolicyError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", range, e.message()),
            })
        })?;

        if spec.mode().contains(RevparseMode::SINGLE) {
            let commit = peel_commit(range, spec.from())?;
            return Ok(vec![(commit.id(), message_of(&commit))]);
        }

        let from = peel_commit(range, spec.from())?;
        let to = peel_commit(range, spec.to())?;

        let mut revwalk = self.inner.revwalk().map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .push(to.id())
            .map_err(|e| command_failed("revwalk.push", e))?;

        if spec.mode().contains(RevparseMode::MERGE_BASE) {
            let base = self
                .inner
                .merge_base(from.id(), to.id())
                .map_err(|e| command_failed("merge-base", e))?;
            revwalk
                .push(from.id())
                .map_err(|e| command_failed("revwalk.push", e))?;
            revwalk
                .hide(base)
                .map_err(|e| command_failed("revwalk.hide", e))?;
        } else {
            revwalk
                .hide(from.id())
                .map_err(|e| command_failed("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| command_failed("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                PolicyError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, message_of(&commit)));
        }

        tracing::debug!("Range {} holds {} commits", range, commits.len());
        Ok(commits)
    }
}

fn peel_commit<'r>(range: &str, object: Option<&git2::Object<'r>>) -> Result<Commit<'r>> {
    let object = object.ok_or_else(|| {
        PolicyError::Git(GitError::InvalidReference {
            reference: range.to_string(),
        })
    })?;
    object.peel_to_commit().map_err(|e| {
        PolicyError::Git(GitError::InvalidReference {
            reference: format!("{}: {}", range, e.message()),
        })
    })
}

/// The raw message, with bytes that are not UTF-8 replaced.
fn message_of(commit: &Commit<'_>) -> String {
    String::from_utf8_lossy(commit.message_bytes()).into_owned()
}

fn command_failed(command: &str, e: git2::Error) -> PolicyError {
    PolicyError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn create_test_repo(messages: &[&str]) -> (TempDir, Vec<Oid>) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oids = messages.iter().map(|m| commit(&repo, m)).collect();
        (dir, oids)
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(PolicyError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit_message() {
        let (dir, _) = create_test_repo(&["feat: first", "Merge pull request #7 from org/x"]);
        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(
            repo.get_commit_message("HEAD").unwrap(),
            "Merge pull request #7 from org/x"
        );
        assert_eq!(repo.get_commit_message("HEAD~1").unwrap(), "feat: first");
    }

    #[test]
    fn test_invalid_reference() {
        let (dir, _) = create_test_repo(&["feat: first"]);
        let repo = Repository::open(dir.path()).unwrap();
        assert!(matches!(
            repo.get_commit_message("no-such-branch"),
            Err(PolicyError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_commits_in_range() {
        let (dir, oids) = create_test_repo(&["feat: one", "fix: two", "docs: three"]);
        let repo = Repository::open(dir.path()).unwrap();

        let range = repo.get_commits_in_range("HEAD~2..HEAD").unwrap();
        let messages: Vec<&str> = range.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(messages, vec!["docs: three", "fix: two"]);
        assert_eq!(range[0].0, oids[2]);

        let open_ended = repo.get_commits_in_range("HEAD~1..").unwrap();
        assert_eq!(open_ended.len(), 1);

        let single = repo.get_commits_in_range("HEAD~2").unwrap();
        assert_eq!(single, vec![(oids[0], "feat: one".to_string())]);
    }

    #[test]
    fn test_commits_in_range_forms() {
        let (dir, _) = create_test_repo(&["feat: one", "fix: two", "docs: three"]);
        let repo = Repository::open(dir.path()).unwrap();

        let symmetric = repo.get_commits_in_range("HEAD~2...HEAD").unwrap();
        let messages: Vec<&str> = symmetric.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(messages, vec!["docs: three", "fix: two"]);

        assert!(repo.get_commits_in_range("..HEAD").unwrap().is_empty());
        assert!(matches!(
            repo.get_commits_in_range("HEAD~1..nowhere"),
            Err(PolicyError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_message_not_utf8() {
        let (dir, _) = create_test_repo(&["feat: one"]);
        let git = Git2Repo::open(dir.path()).unwrap();
        let parent = git.head().unwrap().peel_to_commit().unwrap();

        let mut raw = format!(
            "tree {}\nparent {}\nauthor Test <test@example.com> 0 +0000\n\
             committer Test <test@example.com> 0 +0000\nencoding ISO-8859-1\n\n",
            parent.tree_id(),
            parent.id()
        )
        .into_bytes();
        raw.extend_from_slice(b"Merge pull request #5 from org/caf\xe9\n");
        let oid = git
            .odb()
            .unwrap()
            .write(git2::ObjectType::Commit, &raw)
            .unwrap();
        git.set_head_detached(oid).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        let message = repo.get_commit_message("HEAD").unwrap();
        assert!(message.starts_with("Merge pull request #5 from org/caf"));

        let range = repo.get_commits_in_range("HEAD").unwrap();
        assert_eq!(range, vec![(oid, message)]);
        assert!(crate::policy::LintConfig::default().is_ignored(&range[0].1));
    }
}
