use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Parser;

use autoversion::cli::{run_update_workflow, HookArguments, WorkflowOptions, WorkflowResult};
use autoversion::error::AutoVersionError;
use autoversion::git::{self, VersionControl};
use autoversion::warning::UpdateWarning;
use autoversion::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "autoversion",
    version,
    about = "Bump a version declaration from a commit message marker and tag the commit"
)]
struct Args {
    /// Commit message and commit type (merge, squash, ...), as passed by the git hook
    #[arg(value_name = "HOOK_ARGS")]
    hook_args: Vec<OsString>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, value_name = "VERSION", help = "Current version, instead of reading it from the version file")]
    current: Option<String>,

    #[arg(short, long, help = "Version declaration file to rewrite")]
    file: Option<String>,

    #[arg(
        short,
        long,
        help = "Read the commit message from the file named by the first argument"
    )]
    message_file: bool,

    #[arg(long, help = "Do not amend the commit or create a tag")]
    no_tag: bool,

    #[arg(long, help = "Print the new version without changing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        let code = e
            .downcast_ref::<AutoVersionError>()
            .map(AutoVersionError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let hook_args = match HookArguments::from_positionals(&args.hook_args) {
        Ok(hook_args) => hook_args,
        Err(AutoVersionError::MissingArguments { found }) => {
            tracing::debug!(found, "missing hook arguments");
            ui::display_warning(&UpdateWarning::MissingArguments);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let hook_args = if args.message_file {
        hook_args.with_message_from_file()?
    } else {
        hook_args
    };

    let mut config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    if let Some(file) = args.file {
        config.version_file = file;
    }

    let options = WorkflowOptions {
        current_version: args.current,
        dry_run: args.dry_run,
    };

    let backend: Option<Box<dyn VersionControl>> =
        if config.git.tag && !args.no_tag && !args.dry_run && hook_args.trigger.triggers_update() {
            Some(git::open_backend(&config.git)?)
        } else {
            None
        };

    match run_update_workflow(&hook_args, &options, &config, backend.as_deref())? {
        WorkflowResult::Skipped { trigger } => {
            tracing::debug!(%trigger, "version update skipped");
        }
        WorkflowResult::Updated {
            old_version,
            new_version,
            replacements,
            tagged,
            warnings,
        } => {
            for warning in &warnings {
                ui::display_warning(warning);
            }

            ui::display_version_change(&old_version, &new_version);
            if args.dry_run {
                ui::display_status("Dry run: no files or tags were changed");
            } else {
                ui::display_success(&format!(
                    "Updated {} ({} occurrence(s))",
                    config.output_path().display(),
                    replacements
                ));
                if tagged {
                    ui::display_success(&format!("Tagged commit as {}", new_version));
                }
            }
            println!("\nYour new version is {}", new_version);
        }
    }

    Ok(())
}
