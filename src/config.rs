use crate::error::{AutoVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched in the working directory
pub const LOCAL_CONFIG_FILE: &str = "autoversion.toml";

/// File name searched in the user config directory
pub const USER_CONFIG_FILE: &str = ".autoversion.toml";

/// Represents the complete configuration for autoversion.
///
/// Names the version-declaration file, how to find the version in it, and
/// how the result is recorded in git.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Where the rewritten file is moved; defaults to `version_file`
    #[serde(default)]
    pub output_file: Option<String>,

    #[serde(default = "default_declaration_pattern")]
    pub declaration_pattern: String,

    #[serde(default)]
    pub git: GitConfig,
}

/// Returns the default version-declaration file name.
fn default_version_file() -> String {
    "_version.py".to_string()
}

/// Returns the default pattern locating the version in the declaration file.
///
/// The first capture group is the version string.
fn default_declaration_pattern() -> String {
    r#"__version__\s*=\s*["']([^"']+)["']"#.to_string()
}

/// Which implementation performs the amend and tag operations
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Spawn the git executable
    #[default]
    Command,
    /// Use libgit2 in-process
    Libgit2,
}

/// Configuration for the version-control side effects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Amend the commit and tag it with the new version
    #[serde(default = "default_true")]
    pub tag: bool,

    #[serde(default)]
    pub backend: GitBackend,

    /// Executable used by the command backend
    #[serde(default = "default_git_program")]
    pub program: String,
}

fn default_true() -> bool {
    true
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            tag: default_true(),
            backend: GitBackend::default(),
            program: default_git_program(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            output_file: None,
            declaration_pattern: default_declaration_pattern(),
            git: GitConfig::default(),
        }
    }
}

impl Config {
    /// Path of the declaration file that is read
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(&self.version_file)
    }

    /// Path the rewritten declaration file ends up at
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.output_file.as_deref().unwrap_or(&self.version_file))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autoversion.toml` in current directory
/// 3. `.autoversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            tracing::debug!("no config file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        AutoVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| AutoVersionError::config(e.to_string()))
}
