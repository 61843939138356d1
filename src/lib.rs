//! # doselabel - Bangla Medication Label Composer
//!
//! doselabel renders printable medication-dosage labels for a small clinic.
//! It provides:
//!
//! - **Numeral localization**: Latin digits to Bangla digits, ordinals, dates
//! - **Instruction composition**: dosage sentences with structural emphasis
//! - **Counseling lists**: predefined and custom advice plus a follow-up line
//! - **Sequencing**: "label i of N" annotations for multi-bottle runs
//! - **Print composition**: N sheets, one print job, guaranteed cleanup
//!
//! ## Quick Start
//!
//! ```
//! use doselabel::{
//!     config::{FieldUpdate, LabelConfiguration},
//!     label::render_labels,
//! };
//!
//! let mut config = LabelConfiguration::default();
//! config.apply(FieldUpdate::DropsPerDose(5u32.into()));
//! config.apply(FieldUpdate::LabelCount(3u32.into()));
//! config.apply(FieldUpdate::ShowAllPreviews(true));
//!
//! let labels = render_labels(&config);
//! assert_eq!(labels.len(), 3);
//! assert!(labels[0].instruction.plain_text().contains("৫ ফোঁটা"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`numerals`] | Bangla digits, ordinals and dates |
//! | [`config`] | Label configuration, field updates, state cache |
//! | [`compose`] | Instruction, counseling and sequence composers |
//! | [`label`] | Rendered label content |
//! | [`components`] | Declarative sheet components |
//! | [`markup`] | Element tree and host document |
//! | [`preview`] | Preview page construction |
//! | [`printer`] | Sheet stock and the print compositor |
//! | [`transport`] | Print facilities |
//! | [`session`] | Editor session |
//! | [`server`] | HTTP server |
//! | [`error`] | Error types |

pub mod clinic;
pub mod components;
pub mod compose;
pub mod config;
pub mod error;
pub mod label;
pub mod markup;
pub mod numerals;
pub mod preview;
pub mod printer;
pub mod server;
pub mod session;
pub mod transport;

// Re-exports for convenience
pub use config::LabelConfiguration;
pub use error::LabelError;
pub use printer::{PrintOutcome, SheetConfig};
pub use session::Session;
