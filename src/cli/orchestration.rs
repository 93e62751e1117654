//! Main update workflow
//!
//! Keeps the hook's argument handling and the update sequence out of
//! main.rs so they can be driven programmatically with an injected
//! argument list and version-control backend.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::declaration;
use crate::domain::CommitTrigger;
use crate::error::{AutoVersionError, Result};
use crate::git::VersionControl;
use crate::updater;
use crate::warning::UpdateWarning;

/// The two positional arguments handed over by the git hook
#[derive(Debug, Clone, PartialEq)]
pub struct HookArguments {
    /// Commit message text
    pub commit_message: String,

    /// Commit source indicator ("merge", "squash", ...)
    pub trigger: CommitTrigger,
}

impl HookArguments {
    /// Read the commit message and commit type from a positional argument list.
    ///
    /// Fewer than two arguments is [AutoVersionError::MissingArguments]; an
    /// argument that is not valid UTF-8 is [AutoVersionError::Invocation].
    /// Anything after the second argument is ignored.
    pub fn from_positionals(args: &[OsString]) -> Result<Self> {
        let (message, indicator) = match args {
            [message, indicator, rest @ ..] => {
                if !rest.is_empty() {
                    tracing::debug!(ignored = rest.len(), "ignoring extra hook arguments");
                }
                (message, indicator)
            }
            _ => return Err(AutoVersionError::MissingArguments { found: args.len() }),
        };

        let commit_message = message
            .to_str()
            .ok_or_else(|| AutoVersionError::invocation("commit message is not valid UTF-8"))?;
        let indicator = indicator
            .to_str()
            .ok_or_else(|| AutoVersionError::invocation("commit type is not valid UTF-8"))?;

        Ok(HookArguments {
            commit_message: commit_message.to_string(),
            trigger: CommitTrigger::parse(indicator),
        })
    }

    /// Treat the commit message argument as a path and load the message from it
    ///
    /// This is how git itself calls `prepare-commit-msg`.
    pub fn with_message_from_file(self) -> Result<Self> {
        let path = PathBuf::from(&self.commit_message);
        let commit_message = fs::read_to_string(&path).map_err(|e| {
            AutoVersionError::invocation(format!(
                "cannot read commit message file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(HookArguments {
            commit_message,
            ..self
        })
    }
}

/// Per-run options that are not part of the configuration file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowOptions {
    /// Old version; discovered from the declaration file when absent
    pub current_version: Option<String>,

    /// Compute and report only: no file rewrite, no git
    pub dry_run: bool,
}

/// Result of one workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The commit type does not trigger a version update
    Skipped { trigger: CommitTrigger },

    /// The version was bumped
    Updated {
        old_version: String,
        new_version: String,
        /// Occurrences replaced in the declaration file (0 on a dry run)
        replacements: usize,
        /// Whether the commit was amended and tagged
        tagged: bool,
        warnings: Vec<UpdateWarning>,
    },
}

/// Main update workflow
///
/// 1. Skip unless the commit is a merge or a squash
/// 2. Resolve the old version (option or declaration file)
/// 3. Compute the new version from the commit message
/// 4. Rewrite the declaration file
/// 5. Amend and tag, when a version-control backend is given
pub fn run_update_workflow(
    args: &HookArguments,
    options: &WorkflowOptions,
    config: &Config,
    vcs: Option<&dyn VersionControl>,
) -> Result<WorkflowResult> {
    if !args.trigger.triggers_update() {
        tracing::debug!(trigger = %args.trigger, "commit type does not trigger an update");
        return Ok(WorkflowResult::Skipped {
            trigger: args.trigger.clone(),
        });
    }

    let source = config.source_path();
    let destination = config.output_path();

    let old_version = match &options.current_version {
        Some(version) => version.clone(),
        None => declaration::discover_version(&source, &config.declaration_pattern)?,
    };

    let next = updater::next_version(&old_version, &args.commit_message)?;
    let new_version = next.to_string();

    let mut warnings = Vec::new();
    if !next.is_canonical() {
        tracing::warn!(version = %new_version, "new version does not validate");
        warnings.push(UpdateWarning::NonCanonicalVersion {
            version: new_version.clone(),
        });
    }

    if options.dry_run {
        return Ok(WorkflowResult::Updated {
            old_version,
            new_version,
            replacements: 0,
            tagged: false,
            warnings,
        });
    }

    let replacements = updater::persist(&source, &destination, &old_version, &new_version)?;
    if replacements == 0 {
        warnings.push(UpdateWarning::DeclarationUnchanged {
            file: source.display().to_string(),
            version: old_version.clone(),
        });
    }

    let tagged = match vcs {
        Some(vcs) => {
            updater::tag_release(&new_version, &destination, vcs)?;
            true
        }
        None => false,
    };

    Ok(WorkflowResult::Updated {
        old_version,
        new_version,
        replacements,
        tagged,
        warnings,
    })
}
