use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_sweep_core::document::Diagnostic;
use pdf_sweep_core::{AuditReporter, InvalidReason};
use std::cell::RefCell;
use std::path::Path;

/// Prints audit findings to stdout, one line each, with a spinner on stderr
/// while the directory walk runs.
pub struct ConsoleReporter {
    bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(None),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

pub fn print_invalid(path: &Path, reason: &InvalidReason) {
    println!("{}", Diagnostic { path, reason });
}

impl AuditReporter for ConsoleReporter {
    fn on_scan_start(&self, root: &Path) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(format!("Scanning {}...", root.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        *self.bar.borrow_mut() = Some(pb);
    }

    fn on_scan_complete(&self, total_files: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Scan complete: {} files in {:.2}s",
            "✓".green(),
            total_files,
            duration_secs
        );
    }

    fn on_invalid(&self, path: &Path, reason: &InvalidReason, deleting: bool) {
        print_invalid(path, reason);
        if deleting {
            println!("Invalid PDF detected: {}. Deleting file.", path.display().to_string().red());
        } else {
            println!(
                "Invalid PDF detected: {}. Deletion disabled, keeping file.",
                path.display().to_string().red()
            );
        }
    }

    fn on_uppercase(&self, path: &Path) {
        println!(
            "Uppercase letter found in filename: {}",
            path.display().to_string().yellow()
        );
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.finish_bar();
    }
}
