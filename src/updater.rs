//! Update driver: compute the next version, write it out, record it in git.

use crate::declaration;
use crate::domain::{validate_version_string, CommitType, Version};
use crate::error::Result;
use crate::git::VersionControl;
use std::path::Path;

/// Compute the version that follows `old_version` for `commit_message`.
///
/// Exactly one increment is applied, selected by the message's marker.
///
/// # Example
/// ```
/// use autoversion::updater::apply;
///
/// assert_eq!(apply("1.2.3", "fix #patch").unwrap(), "1.2.4");
/// assert_eq!(apply("1.2.3-dev", "#major").unwrap(), "2.0.0-dev");
/// ```
pub fn apply(old_version: &str, commit_message: &str) -> Result<String> {
    next_version(old_version, commit_message).map(|version| version.to_string())
}

/// Same as [apply], returning the [Version] instead of its string form
pub fn next_version(old_version: &str, commit_message: &str) -> Result<Version> {
    let commit_type = CommitType::classify(commit_message);
    let mut version = Version::parse(old_version)?;
    version.bump(commit_type);

    tracing::debug!(%commit_type, old = old_version, new = %version, "computed next version");
    Ok(version)
}

/// Replace `old_version` with `new_version` in the declaration file.
///
/// Reads `source`, swaps the result atomically into `destination` and returns
/// the number of replacements made.
pub fn persist(
    source: &Path,
    destination: &Path,
    old_version: &str,
    new_version: &str,
) -> Result<usize> {
    declaration::rewrite(source, destination, old_version, new_version)
}

/// Amend the current commit with `file` and tag it `version`.
///
/// The version is validated first, so a version whose field grew past a
/// single digit is refused here before git is touched. Git failures are
/// returned with the tool's exit status.
pub fn tag_release(version: &str, file: &Path, vcs: &dyn VersionControl) -> Result<()> {
    validate_version_string(version)?;

    vcs.amend_with_file(file)?;
    vcs.create_tag(version)?;

    tracing::info!(tag = version, "tagged release");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutoVersionError;
    use crate::git::{MockVersionControl, VcsCall};
    use std::path::PathBuf;

    #[test]
    fn test_apply_patch() {
        assert_eq!(apply("1.2.3", "fix #patch").unwrap(), "1.2.4");
    }

    #[test]
    fn test_apply_default_minor() {
        assert_eq!(apply("1.2.3", "Merge branch 'feature'").unwrap(), "1.3.0");
    }

    #[test]
    fn test_apply_major_keeps_release_type() {
        assert_eq!(apply("1.2.3-dev", "#major").unwrap(), "2.0.0-dev");
    }

    #[test]
    fn test_apply_rejects_malformed_version() {
        assert!(matches!(
            apply("1.2", "#patch"),
            Err(AutoVersionError::Validation { .. })
        ));
    }

    #[test]
    fn test_apply_past_single_digit() {
        assert_eq!(apply("1.2.9", "#patch").unwrap(), "1.2.10");
        assert_eq!(apply("1.9.3", "").unwrap(), "1.10.0");
    }

    #[test]
    fn test_tag_release_amends_then_tags() {
        let vcs = MockVersionControl::new();
        tag_release("1.3.0", Path::new("_version.py"), &vcs).unwrap();

        assert_eq!(
            vcs.calls(),
            vec![
                VcsCall::Amend(PathBuf::from("_version.py")),
                VcsCall::Tag("1.3.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_release_validates_before_git() {
        let vcs = MockVersionControl::new();
        let result = tag_release("1.2.10", Path::new("_version.py"), &vcs);

        assert!(matches!(result, Err(AutoVersionError::Validation { .. })));
        assert!(vcs.calls().is_empty());
    }

    #[test]
    fn test_tag_release_stops_after_failed_amend() {
        let vcs = MockVersionControl::failing(1);
        let result = tag_release("1.3.0", Path::new("_version.py"), &vcs);

        assert!(matches!(
            result,
            Err(AutoVersionError::VcsCommand { code: Some(1), .. })
        ));
        assert_eq!(vcs.calls().len(), 1);
    }
}
