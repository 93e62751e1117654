use crate::error::{AutoVersionError, Result};
use crate::git::VersionControl;
use git2::Repository as Git2Repo;
use std::fs;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Path of `path` relative to the working directory, as the index wants it
    fn workdir_relative(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| AutoVersionError::declaration("repository has no working directory"))?;

        let workdir = fs::canonicalize(workdir)?;
        let absolute = fs::canonicalize(path)?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                AutoVersionError::declaration(format!(
                    "{} is outside the repository at {}",
                    path.display(),
                    workdir.display()
                ))
            })
    }
}

impl VersionControl for Git2Repository {
    fn amend_with_file(&self, path: &Path) -> Result<()> {
        let relative = self.workdir_relative(path)?;

        let mut index = self.repo.index()?;
        index.add_path(&relative)?;
        index.write()?;

        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let head = self.repo.head()?.peel_to_commit()?;

        let amended = head.amend(Some("HEAD"), None, None, None, None, Some(&tree))?;
        tracing::debug!(commit = %amended, file = %relative.display(), "amended HEAD");

        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel(git2::ObjectType::Commit)?;

        self.repo.tag_lightweight(name, &head, false)?;
        tracing::debug!(tag = name, commit = %head.id(), "created tag");

        Ok(())
    }
}
