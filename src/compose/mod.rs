//! # Label Content
//!
//! Pure functions from a [`LabelConfiguration`](crate::config::LabelConfiguration)
//! to the localized text printed on a sheet:
//!
//! - [`compose_instruction`]: the dosage sentence with emphasized values
//! - [`build_counseling_list`]: counseling bullets plus the follow-up line
//! - [`sequence_label`]: "label i of N" for multi-copy runs

mod counseling;
mod emphasis;
mod instruction;
mod sequence;

pub use counseling::*;
pub use emphasis::*;
pub use instruction::*;
pub use sequence::*;
