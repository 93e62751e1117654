use crate::error::{AutoVersionError, Result};
use crate::git::VersionControl;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Runs git operations by spawning the git executable.
///
/// Output is inherited so the user sees git's own messages. A non-zero exit
/// is reported as [AutoVersionError::VcsCommand] with the exit status.
pub struct GitCommand {
    program: String,
}

impl GitCommand {
    /// Use the given executable (normally `git`)
    pub fn new(program: impl Into<String>) -> Self {
        GitCommand {
            program: program.into(),
        }
    }

    fn run(&self, args: &[OsString]) -> Result<()> {
        let command_line = std::iter::once(self.program.clone())
            .chain(args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(command = %command_line, "running git");
        let status = Command::new(&self.program).args(args).status()?;

        if !status.success() {
            return Err(AutoVersionError::VcsCommand {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VersionControl for GitCommand {
    fn amend_with_file(&self, path: &Path) -> Result<()> {
        self.run(&[
            "commit".into(),
            "--amend".into(),
            "--no-edit".into(),
            path.as_os_str().to_owned(),
        ])
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag".into(), name.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_io_error() {
        let git = GitCommand::new("autoversion-no-such-git-binary");
        let result = git.create_tag("1.2.3");
        assert!(matches!(result, Err(AutoVersionError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_surfaces_exit_status() {
        let git = GitCommand::new("false");
        match git.create_tag("1.2.3") {
            Err(AutoVersionError::VcsCommand { command, code }) => {
                assert_eq!(command, "false tag 1.2.3");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected VcsCommand error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_succeeding_program() {
        let git = GitCommand::new("true");
        assert!(git.amend_with_file(Path::new("_version.py")).is_ok());
        assert!(git.create_tag("1.2.3").is_ok());
    }
}
