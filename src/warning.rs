use std::fmt;

/// Non-fatal issues found while updating the version.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateWarning {
    /// The hook did not pass a commit message and commit type
    MissingArguments,
    /// The declaration file did not contain the old version
    DeclarationUnchanged { file: String, version: String },
    /// A field grew past one digit and the version no longer validates
    NonCanonicalVersion { version: String },
}

impl fmt::Display for UpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateWarning::MissingArguments => write!(
                f,
                "No commit message or commit type found! Not enough arguments were passed. \
                 Make sure your prepare-commit-msg git hook is configured correctly."
            ),
            UpdateWarning::DeclarationUnchanged { file, version } => {
                write!(f, "'{}' does not contain version '{}'", file, version)
            }
            UpdateWarning::NonCanonicalVersion { version } => write!(
                f,
                "Version '{}' has a field above 9 and will not be accepted as input again",
                version
            ),
        }
    }
}
