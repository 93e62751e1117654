use std::fmt;

/// Source of the commit being prepared, as passed by the git hook.
///
/// Only merges and squashes trigger a version update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitTrigger {
    Merge,
    Squash,
    Other(String),
}

impl CommitTrigger {
    /// Interpret the hook's commit-type indicator. Matching is exact.
    pub fn parse(indicator: &str) -> Self {
        match indicator {
            "merge" => CommitTrigger::Merge,
            "squash" => CommitTrigger::Squash,
            other => CommitTrigger::Other(other.to_string()),
        }
    }

    /// Whether this commit should bump the version
    pub fn triggers_update(&self) -> bool {
        matches!(self, CommitTrigger::Merge | CommitTrigger::Squash)
    }
}

impl fmt::Display for CommitTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitTrigger::Merge => f.write_str("merge"),
            CommitTrigger::Squash => f.write_str("squash"),
            CommitTrigger::Other(other) => f.write_str(other),
        }
    }
}
