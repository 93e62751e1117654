//! User-facing terminal output.

use console::style;

use crate::warning::UpdateWarning;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning.
pub fn display_warning(warning: &UpdateWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Show the version transition.
pub fn display_version_change(old: &str, new: &str) {
    println!("\n{}", style("Version Change:").bold());
    println!("  From: {}", style(old).red());
    println!("  To:   {}", style(new).green());
}
