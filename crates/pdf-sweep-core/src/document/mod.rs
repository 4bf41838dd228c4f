use lopdf::Document;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Opens a structured document and reports how many pages it has.
pub trait PageCounter {
    fn page_count(&self, path: &Path) -> Result<usize, lopdf::Error>;
}

/// `PageCounter` backed by lopdf's page tree walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfPageCounter;

impl PageCounter for LopdfPageCounter {
    fn page_count(&self, path: &Path) -> Result<usize, lopdf::Error> {
        let document = Document::load(path)?;
        Ok(document.get_pages().len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Opened, but the page tree is empty.
    NoPages,
    /// The parser refused the file; carries its error text.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid { pages: usize },
    Invalid(InvalidReason),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid { .. })
    }
}

/// Human-readable diagnostic for an invalid file, as printed by the CLI.
pub struct Diagnostic<'a> {
    pub path: &'a Path,
    pub reason: &'a InvalidReason,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidReason::NoPages => write!(
                f,
                "'{}' is corrupt or invalid: No pages",
                self.path.display()
            ),
            InvalidReason::Unreadable(message) => write!(f, "{}", message),
        }
    }
}

/// One open attempt. Open failures are folded into `Invalid`, never returned
/// as errors.
pub fn validate_document<C: PageCounter + ?Sized>(counter: &C, path: &Path) -> Validity {
    match counter.page_count(path) {
        Ok(0) => {
            warn!("{} opened with no pages", path.display());
            Validity::Invalid(InvalidReason::NoPages)
        }
        Ok(pages) => {
            debug!("{} has {} pages", path.display(), pages);
            Validity::Valid { pages }
        }
        Err(err) => {
            warn!("{} failed to open: {}", path.display(), err);
            Validity::Invalid(InvalidReason::Unreadable(err.to_string()))
        }
    }
}
