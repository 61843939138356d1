//! # Printer Module
//!
//! Sheet stock and the print compositor.
//!
//! ## Modules
//!
//! - [`config`]: Physical sheet sizes
//! - [`compositor`]: Copies rendered fragments into print pages and hands
//!   them to a print facility

pub mod compositor;
pub mod config;

pub use compositor::{PRINT_PAGE_CLASS, PRINT_ROOT_ID, PrintOutcome, PrintRoot, print_labels};
pub use config::SheetConfig;
