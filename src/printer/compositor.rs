//! # Print Compositor
//!
//! Turns N rendered label fragments into one print job of N sheets.
//!
//! ## Protocol
//!
//! ```text
//! fragments [A, B, C]
//!      │ deep copy, one page each, input order
//!      ▼
//! div#printable-content
//!   ├── div.print-page > A
//!   ├── div.print-page > B
//!   └── div.print-page > C
//!      │ attached to the host document by a PrintRoot guard
//!      ▼
//! facility.print(document)          (synchronous)
//!      │
//!      ▼
//! guard dropped: root detached      (success, error, cancel or unwind)
//! ```
//!
//! The print root exists in the document only while the facility runs.

use serde::Serialize;

use crate::error::LabelError;
use crate::markup::{Element, HostDocument, Node};
use crate::transport::{PrintFacility, PrintStatus};

/// Id of the temporary print root.
pub const PRINT_ROOT_ID: &str = "printable-content";

/// Class of the wrapper holding one sheet.
pub const PRINT_PAGE_CLASS: &str = "print-page";

/// Result of a print request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PrintOutcome {
    /// The facility accepted a job of `sheets` pages.
    Printed { sheets: usize },
    /// The user cancelled the print dialog.
    Cancelled,
    /// Nothing to print; the facility was not invoked.
    Skipped,
}

/// The temporary print root, attached to a host document for as long as
/// the guard lives.
///
/// ## Example
///
/// ```
/// use doselabel::markup::{Element, HostDocument, Node};
/// use doselabel::printer::{PRINT_ROOT_ID, PrintRoot};
///
/// let mut doc = HostDocument::new("Labels", "");
/// let fragments: Vec<Node> = vec![Element::new("p").text("A").into()];
///
/// {
///     let root = PrintRoot::attach(&mut doc, &fragments);
///     assert!(root.document().contains_id(PRINT_ROOT_ID));
/// }
/// assert!(!doc.contains_id(PRINT_ROOT_ID));
/// ```
pub struct PrintRoot<'a> {
    document: &'a mut HostDocument,
    index: usize,
    sheets: usize,
}

impl<'a> PrintRoot<'a> {
    /// Copy each fragment into its own print page and attach the root to
    /// the end of `document`'s body.
    pub fn attach(document: &'a mut HostDocument, fragments: &[Node]) -> Self {
        let pages = fragments
            .iter()
            .map(|fragment| Element::new("div").class(PRINT_PAGE_CLASS).child(fragment.clone()));
        let index = document.body().len();
        document.append(Element::new("div").id(PRINT_ROOT_ID).children(pages));
        tracing::debug!(sheets = fragments.len(), index, "print root attached");

        Self {
            document,
            index,
            sheets: fragments.len(),
        }
    }

    /// The host document with the print root attached.
    pub fn document(&self) -> &HostDocument {
        self.document
    }

    /// Number of print pages under the root.
    pub fn sheets(&self) -> usize {
        self.sheets
    }
}

impl Drop for PrintRoot<'_> {
    fn drop(&mut self) {
        // The guard holds the only borrow, so the root is still at `index`.
        if self.document.body().get(self.index).and_then(Node::id) == Some(PRINT_ROOT_ID) {
            self.document.detach_at(self.index);
            tracing::debug!("print root detached");
        }
    }
}

/// Print `fragments` as one job, one sheet per fragment, in order.
///
/// Empty input is a no-op and returns [`PrintOutcome::Skipped`]. A facility
/// error is returned once the print root has been detached; nothing is
/// retried.
pub fn print_labels<F>(
    document: &mut HostDocument,
    fragments: &[Node],
    facility: &mut F,
) -> Result<PrintOutcome, LabelError>
where
    F: PrintFacility + ?Sized,
{
    if fragments.is_empty() {
        tracing::debug!("nothing to print");
        return Ok(PrintOutcome::Skipped);
    }

    let root = PrintRoot::attach(document, fragments);
    let result = facility.print(root.document());
    let sheets = root.sheets();
    drop(root);

    match result {
        Ok(PrintStatus::Submitted) => {
            tracing::info!(sheets, "labels printed");
            Ok(PrintOutcome::Printed { sheets })
        }
        Ok(PrintStatus::Cancelled) => {
            tracing::info!("print cancelled");
            Ok(PrintOutcome::Cancelled)
        }
        Err(e) => {
            tracing::warn!(error = %e, "print failed");
            Err(e)
        }
    }
}
