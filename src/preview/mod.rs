//! # Label Preview
//!
//! Builds the host document the labels are previewed in.
//!
//! ## Architecture
//!
//! ```text
//! RenderedLabel[] → LabelSheet (per label) → div.printable-label-wrapper
//!                                                  ↓
//!                                     HostDocument body > main#preview
//! ```
//!
//! The wrappers are exactly what the print compositor copies into print
//! pages, so the printed sheets are the previewed sheets.
//!
//! ## Example
//!
//! ```
//! use doselabel::clinic::ClinicProfile;
//! use doselabel::config::LabelConfiguration;
//! use doselabel::label::render_labels;
//! use doselabel::preview::{preview_document, printable_fragments};
//! use doselabel::printer::SheetConfig;
//!
//! let config = LabelConfiguration::default();
//! let labels = render_labels(&config);
//! let doc = preview_document(&labels, &ClinicProfile::default(), &SheetConfig::default());
//!
//! assert_eq!(printable_fragments(&doc).len(), 1);
//! ```

mod style;

pub use style::stylesheet;

use crate::clinic::ClinicProfile;
use crate::components::{ComponentExt, LabelSheet};
use crate::label::RenderedLabel;
use crate::markup::{Element, HostDocument, Node};
use crate::printer::SheetConfig;

/// Class of the element wrapping one previewed sheet.
pub const LABEL_WRAPPER_CLASS: &str = "printable-label-wrapper";

/// Id of the container holding the previews.
pub const PREVIEW_ID: &str = "preview";

/// Page title.
pub const TITLE: &str = "ঔষধ সেবনের নিয়মাবলী";

/// Wrap one rendered label in its preview wrapper.
pub fn label_fragment(label: &RenderedLabel, clinic: &ClinicProfile) -> Node {
    Element::new("div")
        .class(LABEL_WRAPPER_CLASS)
        .children(LabelSheet::for_label(label, clinic).compile())
        .into()
}

/// The preview page for `labels`, in order.
pub fn preview_document(
    labels: &[RenderedLabel],
    clinic: &ClinicProfile,
    sheet: &SheetConfig,
) -> HostDocument {
    let mut doc = HostDocument::new(TITLE, stylesheet(sheet));
    doc.append(
        Element::new("main")
            .id(PREVIEW_ID)
            .children(labels.iter().map(|label| label_fragment(label, clinic))),
    );
    tracing::debug!(labels = labels.len(), "preview document built");
    doc
}

/// The previewed sheets, in document order. This is what gets printed.
pub fn printable_fragments(document: &HostDocument) -> Vec<Node> {
    document
        .find_all_by_class(LABEL_WRAPPER_CLASS)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldUpdate, LabelConfiguration};
    use crate::label::{render_all_labels, render_labels};
    use chrono::NaiveDate;

    fn config() -> LabelConfiguration {
        let mut config = LabelConfiguration::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        config.apply(FieldUpdate::LabelCount(3u32.into()));
        config
    }

    #[test]
    fn test_one_wrapper_per_label() {
        let labels = render_all_labels(&config());
        let doc = preview_document(&labels, &ClinicProfile::default(), &SheetConfig::default());
        let fragments = printable_fragments(&doc);
        assert_eq!(fragments.len(), 3);

        let badges: Vec<String> = fragments
            .iter()
            .map(|f| f.find_all_by_class("sequence-badge")[0].text_content())
            .collect();
        assert_eq!(
            badges,
            vec![
                "১ নং ঔষধ (৩ টির মধ্যে)",
                "২ নং ঔষধ (৩ টির মধ্যে)",
                "৩ নং ঔষধ (৩ টির মধ্যে)",
            ]
        );
    }

    #[test]
    fn test_active_label_only() {
        let labels = render_labels(&config());
        let doc = preview_document(&labels, &ClinicProfile::default(), &SheetConfig::default());
        assert_eq!(printable_fragments(&doc).len(), 1);
    }

    #[test]
    fn test_stylesheet_has_print_rules() {
        let doc = preview_document(&[], &ClinicProfile::default(), &SheetConfig::default());
        assert!(doc.stylesheet.contains("@page { size: 3.6in 5.6in;"));
        assert!(doc.stylesheet.contains(".prescription-sheet { width: 3.6in;"));
        assert!(printable_fragments(&doc).is_empty());
    }
}
