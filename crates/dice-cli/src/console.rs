//! CLI console utilities

use colored::*;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    progress_bar: Option<ProgressBar>,
}

impl CliConsole {
    /// Create a new CLI console
    ///
    /// Colors are turned off when stdout is not a terminal.
    pub fn new(verbose: bool) -> Self {
        if !Term::stdout().is_term() {
            colored::control::set_override(false);
        }
        Self {
            verbose,
            progress_bar: None,
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print a `label: value` line
    pub fn print_field(&self, label: &str, value: impl std::fmt::Display) {
        println!("  {:<22} {}", format!("{}:", label).cyan(), value);
    }

    /// Start a spinner on stderr
    pub fn start_progress(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    /// Finish the spinner, if any
    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }
}
