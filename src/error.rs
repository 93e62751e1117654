use thiserror::Error;

/// Unified error type for autoversion operations
#[derive(Error, Debug)]
pub enum AutoVersionError {
    #[error(
        "Invalid version string '{input}'. Please use the format 'a.b.c' or 'a.b.c-type', \
         where a, b, c are single digits and type is alphanumeric."
    )]
    Validation { input: String },

    #[error("No commit message or commit type found ({found} of 2 arguments given)")]
    MissingArguments { found: usize },

    #[error("Auto versioning error: there is a problem accessing the command-line arguments ({0})")]
    Invocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version declaration error: {0}")]
    Declaration(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("`{}` {}", .command, describe_exit(.code))]
    VcsCommand { command: String, code: Option<i32> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autoversion
pub type Result<T> = std::result::Result<T, AutoVersionError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl AutoVersionError {
    /// Create a validation error for the given input
    pub fn validation(input: impl Into<String>) -> Self {
        AutoVersionError::Validation {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoVersionError::Config(msg.into())
    }

    /// Create a declaration error with context
    pub fn declaration(msg: impl Into<String>) -> Self {
        AutoVersionError::Declaration(msg.into())
    }

    /// Create an invocation error with context
    pub fn invocation(msg: impl Into<String>) -> Self {
        AutoVersionError::Invocation(msg.into())
    }

    /// Exit status the process should terminate with for this error.
    ///
    /// A failed git subprocess hands its own status through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutoVersionError::VcsCommand {
                code: Some(code), ..
            } => *code,
            _ => 1,
        }
    }
}
