pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod naming;
pub mod remover;
pub mod reporter;
pub mod scanner;

pub use config::AuditConfig;
pub use document::{validate_document, InvalidReason, LopdfPageCounter, PageCounter, Validity};
pub use engine::{AuditResult, Auditor};
pub use error::Error;
pub use reporter::{AuditReporter, SilentReporter};
