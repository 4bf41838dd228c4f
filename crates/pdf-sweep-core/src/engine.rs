use crate::config::AuditConfig;
use crate::document::{validate_document, LopdfPageCounter, PageCounter, Validity};
use crate::error::Error;
use crate::naming;
use crate::remover;
use crate::reporter::AuditReporter;
use crate::scanner;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Auditor<C = LopdfPageCounter> {
    config: AuditConfig,
    counter: C,
}

#[derive(Debug, Default)]
pub struct AuditResult {
    pub scan_duration: Duration,
    pub files_scanned: usize,
    pub invalid_files: Vec<PathBuf>,
    pub deleted_files: Vec<PathBuf>,
    pub uppercase_files: Vec<PathBuf>,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            counter: LopdfPageCounter,
        }
    }
}

impl<C: PageCounter> Auditor<C> {
    /// Swap the document parser, e.g. for a stub in tests.
    pub fn with_page_counter<D: PageCounter>(self, counter: D) -> Auditor<D> {
        Auditor {
            config: self.config,
            counter,
        }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the audit:
    /// 1. Walk the root for files ending in the configured extension
    /// 2. Per file, in scan order: validate, optionally delete, check the name
    ///
    /// Invalid documents are reported, never returned as errors. Walk and
    /// removal failures abort the run.
    pub fn run(&self, reporter: &dyn AuditReporter) -> Result<AuditResult, Error> {
        let AuditConfig {
            root,
            extension,
            delete_invalid,
        } = &self.config;

        info!("Scanning {} for *{} files...", root.display(), extension);
        reporter.on_scan_start(root);
        let scan_start = Instant::now();
        let paths = scanner::find_files_with_suffix(root, extension)?;
        let scan_duration = scan_start.elapsed();
        reporter.on_scan_complete(paths.len(), scan_duration.as_secs_f64());
        debug!(
            "Scan completed in {:.2}s, {} files",
            scan_duration.as_secs_f64(),
            paths.len()
        );

        let mut result = AuditResult {
            scan_duration,
            files_scanned: paths.len(),
            ..AuditResult::default()
        };

        for path in paths {
            if let Validity::Invalid(reason) = validate_document(&self.counter, &path) {
                reporter.on_invalid(&path, &reason, *delete_invalid);
                if *delete_invalid {
                    remover::remove_file(&path)?;
                    result.deleted_files.push(path.clone());
                }
                result.invalid_files.push(path.clone());
            }

            if naming::has_uppercase(&naming::file_name(&path)) {
                reporter.on_uppercase(&path);
                result.uppercase_files.push(path);
            }
        }

        info!(
            "Audited {} files: {} invalid, {} deleted, {} with uppercase names",
            result.files_scanned,
            result.invalid_files.len(),
            result.deleted_files.len(),
            result.uppercase_files.len(),
        );

        Ok(result)
    }
}
