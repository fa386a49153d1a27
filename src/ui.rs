//! Terminal output for diagnostics.
//!
//! Both binaries report failures as a single `[ERROR]` line on stderr.

use console::style;

/// Print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!(
        "{} {}",
        style("[ERROR]").for_stderr().red().bold(),
        message
    );
}

/// Print usage text on stderr.
pub fn display_usage(usage: &str) {
    eprintln!("{}", style(usage).for_stderr().dim());
}
