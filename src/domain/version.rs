use crate::domain::CommitType;
use crate::error::{AutoVersionError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Accepted textual shape: one digit per numeric field, optional `-suffix`.
const VERSION_PATTERN: &str = r"^[0-9]\.[0-9]\.[0-9](-\w+)*$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Check that a string has the shape `a.b.c` or `a.b.c-type`.
///
/// Each numeric field is a single digit and at most one `-` may appear.
/// "10.0.0", "1.2" and "1.2.3-a-b" are all rejected.
pub fn validate_version_string(version_string: &str) -> Result<()> {
    if !version_regex().is_match(version_string) || version_string.matches('-').count() > 1 {
        return Err(AutoVersionError::validation(version_string));
    }
    Ok(())
}

/// A version of a piece of software, e.g. `1.2.3-dev`.
///
/// `release_type` is empty when the version has no suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release_type: String,
}

impl Version {
    /// Create a version without a release type
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            release_type: String::new(),
        }
    }

    /// Create a version carrying a release type suffix
    pub fn with_release_type(
        major: u32,
        minor: u32,
        patch: u32,
        release_type: impl Into<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            release_type: release_type.into(),
        }
    }

    /// Parse a validated version string (e.g. "1.3.4-dev")
    pub fn parse(version_string: &str) -> Result<Self> {
        validate_version_string(version_string)?;

        let (number, release_type) = match version_string.split_once('-') {
            Some((number, release_type)) => (number, release_type),
            None => (version_string, ""),
        };

        let fields = number
            .split('.')
            .map(|field| {
                field
                    .parse::<u32>()
                    .map_err(|_| AutoVersionError::validation(version_string))
            })
            .collect::<Result<Vec<u32>>>()?;

        match fields.as_slice() {
            &[major, minor, patch] => Ok(Version {
                major,
                minor,
                patch,
                release_type: release_type.to_string(),
            }),
            _ => Err(AutoVersionError::validation(version_string)),
        }
    }

    /// Increment the patch number
    pub fn increment_patch(&mut self) {
        self.patch += 1;
    }

    /// Increment the minor number and reset patch
    pub fn increment_minor(&mut self) {
        self.minor += 1;
        self.patch = 0;
    }

    /// Increment the major number and reset minor and patch
    pub fn increment_major(&mut self) {
        self.major += 1;
        self.minor = 0;
        self.patch = 0;
    }

    /// Apply the single increment selected by `commit_type`
    pub fn bump(&mut self, commit_type: CommitType) {
        match commit_type {
            CommitType::Patch => self.increment_patch(),
            CommitType::Minor => self.increment_minor(),
            CommitType::Major => self.increment_major(),
        }
    }

    /// Whether the serialized form would pass validation again.
    ///
    /// Incrementing a field that is already 9 produces a two-digit field
    /// ("1.2.9" -> "1.2.10"), which validation rejects.
    pub fn is_canonical(&self) -> bool {
        validate_version_string(&self.to_string()).is_ok()
    }
}

impl FromStr for Version {
    type Err = AutoVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.release_type.is_empty() {
            write!(f, "-{}", self.release_type)?;
        }
        Ok(())
    }
}
