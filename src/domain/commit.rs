use std::collections::HashSet;
use std::fmt;

/// Kind of version increment requested by a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    /// A small fix
    Patch,
    /// The default when no marker is present
    Minor,
    /// A breaking change
    Major,
}

impl CommitType {
    /// Marker token that selects this type in a commit message
    pub fn marker(&self) -> &'static str {
        match self {
            CommitType::Patch => "#patch",
            CommitType::Minor => "#minor",
            CommitType::Major => "#major",
        }
    }

    /// Classify a commit message by its `#patch` / `#minor` / `#major` marker.
    ///
    /// Markers are matched as whole whitespace-separated tokens, case-insensitively.
    /// When several markers are present, patch wins over minor, and minor over
    /// major, regardless of where they appear in the text. Without a marker the
    /// result is `Minor`.
    pub fn classify(commit_message: &str) -> Self {
        let lowered = commit_message.to_lowercase();
        let tokens: HashSet<&str> = lowered.split_whitespace().collect();

        [CommitType::Patch, CommitType::Minor, CommitType::Major]
            .into_iter()
            .find(|commit_type| tokens.contains(commit_type.marker()))
            .unwrap_or(CommitType::Minor)
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommitType::Patch => "patch",
            CommitType::Minor => "minor",
            CommitType::Major => "major",
        };
        f.write_str(name)
    }
}
