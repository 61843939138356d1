//! # Label Sequencer
//!
//! When several bottles are labelled in one run, each sheet says which one
//! it is and which one must be finished before it.

use serde::Serialize;

use crate::numerals::localize_numerals;

/// Where a sheet sits relative to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceOrder {
    /// Take this one first.
    First,
    /// Take after sheet `previous` is finished.
    After { previous: u32 },
}

/// Localized "label i of N" text for a multi-copy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceAnnotation {
    pub index: u32,
    pub total: u32,
    pub order: SequenceOrder,
    /// e.g. "২ নং ঔষধ (৩ টির মধ্যে)"
    pub heading: String,
    /// e.g. "১ নং ঔষধ শেষ হলে এটি সেবন করবেন"
    pub clause: String,
}

/// Annotation for sheet `index` of `total`, or `None` for a single-copy run.
///
/// `index` is 1-based and clamped into `1..=total`.
///
/// ```
/// use doselabel::compose::sequence_label;
///
/// assert!(sequence_label(1, 1).is_none());
/// let second = sequence_label(2, 3).unwrap();
/// assert_eq!(second.heading, "২ নং ঔষধ (৩ টির মধ্যে)");
/// ```
pub fn sequence_label(index: u32, total: u32) -> Option<SequenceAnnotation> {
    if total <= 1 {
        return None;
    }
    let index = index.clamp(1, total);

    let heading = format!(
        "{} নং ঔষধ ({} টির মধ্যে)",
        localize_numerals(index),
        localize_numerals(total)
    );
    let (order, clause) = if index == 1 {
        (SequenceOrder::First, "প্রথমে এই ঔষধটি সেবন করবেন".to_string())
    } else {
        let previous = index - 1;
        (
            SequenceOrder::After { previous },
            format!("{} নং ঔষধ শেষ হলে এটি সেবন করবেন", localize_numerals(previous)),
        )
    };

    Some(SequenceAnnotation {
        index,
        total,
        order,
        heading,
        clause,
    })
}
