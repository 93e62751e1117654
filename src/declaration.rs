//! Reading and rewriting the version-declaration file.
//!
//! The file is plain text (typically a `_version.py` holding
//! `__version__ = "1.2.3"`). Rewrites go through a temporary file in the
//! destination directory which is then renamed over the destination.

use crate::error::{AutoVersionError, Result};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Find the current version declared in `path`.
///
/// `pattern` is a regex whose first capture group is the version string.
/// The first match in the file wins.
pub fn discover_version(path: &Path, pattern: &str) -> Result<String> {
    let re = Regex::new(pattern).map_err(|e| {
        AutoVersionError::config(format!("invalid declaration pattern '{}': {}", pattern, e))
    })?;

    let contents = fs::read_to_string(path).map_err(|e| {
        AutoVersionError::declaration(format!("cannot read {}: {}", path.display(), e))
    })?;

    re.captures(&contents)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            AutoVersionError::declaration(format!(
                "no version declaration matching '{}' in {}",
                pattern,
                path.display()
            ))
        })
}

/// Replace every literal occurrence of `old_version` with `new_version`.
///
/// Works line by line so line endings are preserved as they are.
/// Returns the rewritten text and the number of replacements made.
pub fn replace_version(contents: &str, old_version: &str, new_version: &str) -> (String, usize) {
    if old_version.is_empty() {
        return (contents.to_string(), 0);
    }

    let mut replacements = 0;
    let rewritten: String = contents
        .split_inclusive('\n')
        .map(|line| {
            replacements += line.matches(old_version).count();
            line.replace(old_version, new_version)
        })
        .collect();

    (rewritten, replacements)
}

/// Rewrite `source` with the new version and atomically move it to `destination`.
///
/// When `destination` differs from `source`, `source` is removed afterwards.
/// Returns the number of replacements made.
pub fn rewrite(
    source: &Path,
    destination: &Path,
    old_version: &str,
    new_version: &str,
) -> Result<usize> {
    let contents = fs::read_to_string(source).map_err(|e| {
        AutoVersionError::declaration(format!("cannot read {}: {}", source.display(), e))
    })?;

    let (rewritten, replacements) = replace_version(&contents, old_version, new_version);

    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(directory)?;
    temp.write_all(rewritten.as_bytes())?;
    temp.flush()?;

    // Keep the original file's permissions on the replacement.
    if let Ok(metadata) = fs::metadata(source) {
        fs::set_permissions(temp.path(), metadata.permissions())?;
    }

    temp.persist(destination).map_err(|e| e.error)?;
    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        replacements,
        "rewrote version declaration"
    );

    if !same_file(source, destination) {
        fs::remove_file(source)?;
    }

    Ok(replacements)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PATTERN: &str = r#"__version__\s*=\s*["']([^"']+)["']"#;

    #[test]
    fn test_replace_version_every_line() {
        let contents = "__version__ = \"1.2.3\"\n# previous: 1.2.3\nname = \"x\"\n";
        let (rewritten, count) = replace_version(contents, "1.2.3", "1.3.0");
        assert_eq!(
            rewritten,
            "__version__ = \"1.3.0\"\n# previous: 1.3.0\nname = \"x\"\n"
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_version_preserves_crlf_and_missing_newline() {
        let (rewritten, count) = replace_version("a 1.0.0\r\nb", "1.0.0", "2.0.0");
        assert_eq!(rewritten, "a 2.0.0\r\nb");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_version_no_match() {
        let (rewritten, count) = replace_version("nothing here\n", "1.0.0", "2.0.0");
        assert_eq!(rewritten, "nothing here\n");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_discover_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_version.py");
        fs::write(&path, "# generated\n__version__ = '1.3.4-dev'\n").unwrap();

        assert_eq!(discover_version(&path, PATTERN).unwrap(), "1.3.4-dev");
    }

    #[test]
    fn test_discover_version_missing_declaration() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_version.py");
        fs::write(&path, "VERSION = 3\n").unwrap();

        let result = discover_version(&path, PATTERN);
        assert!(matches!(result, Err(AutoVersionError::Declaration(_))));
    }

    #[test]
    fn test_discover_version_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = discover_version(&dir.path().join("absent.py"), PATTERN);
        assert!(matches!(result, Err(AutoVersionError::Declaration(_))));
    }

    #[test]
    fn test_discover_version_bad_pattern() {
        let dir = TempDir::new().unwrap();
        let result = discover_version(&dir.path().join("_version.py"), "(");
        assert!(matches!(result, Err(AutoVersionError::Config(_))));
    }

    #[test]
    fn test_rewrite_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_version.py");
        fs::write(&path, "__version__ = \"1.2.3\"\n").unwrap();

        let count = rewrite(&path, &path, "1.2.3", "1.2.4").unwrap();

        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "__version__ = \"1.2.4\"\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_rewrite_to_other_destination_removes_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("_version.py");
        let destination = dir.path().join("version.py");
        fs::write(&source, "__version__ = \"0.9.0-rc1\"\n").unwrap();

        rewrite(&source, &destination, "0.9.0-rc1", "1.0.0-rc1").unwrap();

        assert!(!source.exists());
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "__version__ = \"1.0.0-rc1\"\n"
        );
    }

    #[test]
    fn test_rewrite_missing_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_version.py");
        let result = rewrite(&path, &path, "1.0.0", "1.1.0");
        assert!(matches!(result, Err(AutoVersionError::Declaration(_))));
    }
}
