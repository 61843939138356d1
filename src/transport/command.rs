//! # Command Facility
//!
//! Hands the print document to an external program. The document is written
//! to a temporary HTML file whose path is passed as the last argument:
//!
//! ```bash
//! # CUPS
//! $ doselabel print --config label.json --command lp --arg -d --arg label_printer
//!
//! # Chromium, printing without a dialog
//! $ doselabel print --config label.json --command chromium --arg --kiosk-printing
//! ```
//!
//! The temporary file is removed once the program exits, whatever the
//! outcome.

use std::io::Write;
use std::process::Command;

use super::{PrintFacility, PrintStatus};
use crate::error::LabelError;
use crate::markup::HostDocument;

/// Print by running an external program.
///
/// ## Example
///
/// ```no_run
/// use doselabel::markup::HostDocument;
/// use doselabel::transport::{CommandFacility, PrintFacility};
///
/// let mut lp = CommandFacility::new("lp").arg("-d").arg("label_printer");
/// lp.print(&HostDocument::new("Labels", ""))?;
///
/// # Ok::<(), doselabel::error::LabelError>(())
/// ```
pub struct CommandFacility {
    program: String,
    args: Vec<String>,
    cancel_code: Option<i32>,
}

impl CommandFacility {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cancel_code: None,
        }
    }

    /// Add an argument placed before the document path.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several arguments placed before the document path.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Treat exit status `code` as the user cancelling the dialog rather
    /// than a failure.
    pub fn cancel_on_exit_code(mut self, code: i32) -> Self {
        self.cancel_code = Some(code);
        self
    }
}

impl PrintFacility for CommandFacility {
    fn print(&mut self, document: &HostDocument) -> Result<PrintStatus, LabelError> {
        let mut file = tempfile::Builder::new()
            .prefix("doselabel-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(document.to_html().as_bytes())?;
        file.flush()?;

        tracing::debug!(program = %self.program, path = %file.path().display(), "running print command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .status()
            .map_err(|e| LabelError::Print(format!("Failed to run {}: {}", self.program, e)))?;

        let path = file.path().to_path_buf();
        if let Err(e) = file.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove print file");
        }

        match status.code() {
            Some(0) => {
                tracing::info!(program = %self.program, "print job submitted");
                Ok(PrintStatus::Submitted)
            }
            Some(code) if Some(code) == self.cancel_code => {
                tracing::info!(program = %self.program, "print job cancelled");
                Ok(PrintStatus::Cancelled)
            }
            _ => Err(LabelError::Print(format!(
                "{} exited with {}",
                self.program, status
            ))),
        }
    }
}
