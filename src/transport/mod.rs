//! # Print Facilities
//!
//! This module provides the backends a composed print document is handed to.
//!
//! ## Available Facilities
//!
//! - [`file`]: Write the print document to an HTML file
//! - [`command`]: Hand the print document to an external program (`lp`,
//!   a browser in kiosk-print mode, ...)
//!
//! A facility is invoked synchronously and reports whether the job was
//! submitted or cancelled. The compositor owns cleanup, so a facility never
//! needs to undo anything in the document it was given.

pub mod command;
pub mod file;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::LabelError;
use crate::markup::HostDocument;

pub use command::CommandFacility;
pub use file::HtmlFileFacility;

/// What happened to a print job once the facility returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintStatus {
    /// The job left for the printer.
    Submitted,
    /// The user dismissed the print dialog.
    Cancelled,
}

/// The host mechanism that turns a document into printed sheets.
pub trait PrintFacility {
    /// Print `document` synchronously.
    fn print(&mut self, document: &HostDocument) -> Result<PrintStatus, LabelError>;
}

impl<F: PrintFacility + ?Sized> PrintFacility for Box<F> {
    fn print(&mut self, document: &HostDocument) -> Result<PrintStatus, LabelError> {
        (**self).print(document)
    }
}

/// Where print jobs go, as chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrintTarget {
    /// Write the document to an HTML file.
    File { path: PathBuf },
    /// Run `program [args...] <document.html>`.
    Command { program: String, args: Vec<String> },
}

impl PrintTarget {
    /// Build the facility for this target.
    pub fn facility(&self) -> Box<dyn PrintFacility + Send> {
        match self {
            PrintTarget::File { path } => Box::new(HtmlFileFacility::new(path.clone())),
            PrintTarget::Command { program, args } => {
                Box::new(CommandFacility::new(program.clone()).args(args.iter().cloned()))
            }
        }
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::File {
            path: PathBuf::from("labels-print.html"),
        }
    }
}

impl std::fmt::Display for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintTarget::File { path } => write!(f, "file {}", path.display()),
            PrintTarget::Command { program, args } if args.is_empty() => {
                write!(f, "command {}", program)
            }
            PrintTarget::Command { program, args } => {
                write!(f, "command {} {}", program, args.join(" "))
            }
        }
    }
}
