use std::path::Path;

use crate::document::InvalidReason;

/// Receives diagnostics and progress from an audit run.
///
/// The CLI prints findings to stdout; tests collect them. All methods have
/// default no-op implementations.
pub trait AuditReporter {
    fn on_scan_start(&self, _root: &Path) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
    /// `deleting` is true when the file is about to be removed.
    fn on_invalid(&self, _path: &Path, _reason: &InvalidReason, _deleting: bool) {}
    fn on_uppercase(&self, _path: &Path) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl AuditReporter for SilentReporter {}
