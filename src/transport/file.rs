//! # HTML File Facility
//!
//! Writes the print document to a file, for printing from a browser or
//! for keeping a copy of what was printed.

use std::fs;
use std::path::{Path, PathBuf};

use super::{PrintFacility, PrintStatus};
use crate::error::LabelError;
use crate::markup::HostDocument;

/// Print to an HTML file.
///
/// ## Example
///
/// ```no_run
/// use doselabel::markup::HostDocument;
/// use doselabel::transport::{HtmlFileFacility, PrintFacility};
///
/// let mut facility = HtmlFileFacility::new("labels.html");
/// facility.print(&HostDocument::new("Labels", ""))?;
///
/// # Ok::<(), doselabel::error::LabelError>(())
/// ```
pub struct HtmlFileFacility {
    path: PathBuf,
}

impl HtmlFileFacility {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintFacility for HtmlFileFacility {
    fn print(&mut self, document: &HostDocument) -> Result<PrintStatus, LabelError> {
        fs::write(&self.path, document.to_html()).map_err(|e| {
            LabelError::Print(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::info!(path = %self.path.display(), "print document written");
        Ok(PrintStatus::Submitted)
    }
}
