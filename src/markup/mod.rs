//! # Markup
//!
//! The layer between label components and what a print facility consumes.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌─────────────┐     ┌──────────────┐     ┌──────────┐
//! │ RenderedLabel │ ──► │ Components  │ ──► │ Node tree    │ ──► │ HTML     │
//! │ (text)        │     │(declarative)│     │ (fragment)   │     │ (page)   │
//! └───────────────┘     └─────────────┘     └──────────────┘     └──────────┘
//! ```
//!
//! Keeping a tree rather than emitting HTML directly lets the preview be
//! inspected in tests and lets the print compositor deep-copy fragments.
//!
//! ## Example
//!
//! ```
//! use doselabel::markup::{Element, HostDocument, Node};
//!
//! let mut doc = HostDocument::new("Labels", "");
//! doc.append(Element::new("div").class("printable-label-wrapper").text("১"));
//!
//! assert_eq!(doc.find_all_by_class("printable-label-wrapper").len(), 1);
//! assert!(doc.to_html().contains("১"));
//! ```

mod document;
mod html;
mod node;

pub use document::HostDocument;
pub use html::escape;
pub use node::{Element, Node};
