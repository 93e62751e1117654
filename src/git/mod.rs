//! Version-control abstraction layer
//!
//! Recording a release takes two operations: fold the rewritten declaration
//! file into the current commit, then tag that commit with the new version.
//! The [VersionControl] trait covers both so the update driver can be tested
//! without a repository.
//!
//! Implementations:
//!
//! - [command::GitCommand]: spawns the `git` executable
//! - [repository::Git2Repository]: in-process through the `git2` crate
//! - [mock::MockVersionControl]: records calls for tests

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::{MockVersionControl, VcsCall};
pub use repository::Git2Repository;

use crate::config::{GitBackend, GitConfig};
use crate::error::Result;
use std::path::Path;

/// Version-control operations needed to record a release
pub trait VersionControl {
    /// Amend the current commit so that it includes `path`
    ///
    /// The commit message, author and committer are kept.
    fn amend_with_file(&self, path: &Path) -> Result<()>;

    /// Create a lightweight tag named `name` on the current commit
    fn create_tag(&self, name: &str) -> Result<()>;
}

/// Build the backend selected in configuration
pub fn open_backend(config: &GitConfig) -> Result<Box<dyn VersionControl>> {
    match config.backend {
        GitBackend::Command => Ok(Box::new(GitCommand::new(&config.program))),
        GitBackend::Libgit2 => Ok(Box::new(Git2Repository::open(".")?)),
    }
}
