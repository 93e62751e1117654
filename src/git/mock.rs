use crate::error::{AutoVersionError, Result};
use crate::git::VersionControl;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A call recorded by [MockVersionControl]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Amend(PathBuf),
    Tag(String),
}

/// Mock version control for testing without a repository
pub struct MockVersionControl {
    calls: RefCell<Vec<VcsCall>>,
    fail_with_code: Option<i32>,
}

impl MockVersionControl {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        MockVersionControl {
            calls: RefCell::new(Vec::new()),
            fail_with_code: None,
        }
    }

    /// Create a mock where every operation fails with the given exit status
    pub fn failing(code: i32) -> Self {
        MockVersionControl {
            calls: RefCell::new(Vec::new()),
            fail_with_code: Some(code),
        }
    }

    /// Calls recorded so far, in order
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: VcsCall, command: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_with_code {
            Some(code) => Err(AutoVersionError::VcsCommand {
                command,
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockVersionControl {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockVersionControl {
    fn amend_with_file(&self, path: &Path) -> Result<()> {
        self.record(
            VcsCall::Amend(path.to_path_buf()),
            format!("git commit --amend --no-edit {}", path.display()),
        )
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(VcsCall::Tag(name.to_string()), format!("git tag {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls_in_order() {
        let vcs = MockVersionControl::new();
        vcs.amend_with_file(Path::new("_version.py")).unwrap();
        vcs.create_tag("1.2.4").unwrap();

        assert_eq!(
            vcs.calls(),
            vec![
                VcsCall::Amend(PathBuf::from("_version.py")),
                VcsCall::Tag("1.2.4".to_string()),
            ]
        );
    }

    #[test]
    fn test_failing_mock() {
        let vcs = MockVersionControl::failing(128);
        let err = vcs.create_tag("1.2.4").unwrap_err();
        assert_eq!(err.exit_code(), 128);
        assert_eq!(vcs.calls().len(), 1);
    }

    #[test]
    fn test_mock_default() {
        assert!(MockVersionControl::default().calls().is_empty());
    }
}
