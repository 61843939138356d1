//! # Rendered Labels
//!
//! A [`RenderedLabel`] is everything printed on one sheet, as localized text.
//! It is derived from the configuration on every render and never stored.

use serde::Serialize;

use crate::compose::{
    EmphasizedText, SequenceAnnotation, build_counseling_list, compose_instruction,
    sequence_label,
};
use crate::config::LabelConfiguration;
use crate::numerals::localize_date;

/// Header fields at the top of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelHeader {
    pub serial_number: String,
    pub patient_name: String,
    /// Issue date, `dd/MM/yyyy` in Bangla digits.
    pub date: String,
}

/// Content of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLabel {
    /// 1-based sheet index.
    pub index: u32,
    pub header: LabelHeader,
    pub sequence: Option<SequenceAnnotation>,
    pub instruction: EmphasizedText,
    pub counseling: Vec<String>,
}

/// Render sheet `index` of `config`.
pub fn render_label(config: &LabelConfiguration, index: u32) -> RenderedLabel {
    let index = index.clamp(1, config.label_count());
    RenderedLabel {
        index,
        header: LabelHeader {
            serial_number: config.serial_number.clone(),
            patient_name: config.patient_name.clone(),
            date: localize_date(config.date),
        },
        sequence: sequence_label(index, config.label_count()),
        instruction: compose_instruction(config),
        counseling: build_counseling_list(config.counseling().entries(), config.follow_up_days),
    }
}

/// Render the sheets `config` currently shows: all of them when
/// `show_all_previews` is set, otherwise only the active one.
pub fn render_labels(config: &LabelConfiguration) -> Vec<RenderedLabel> {
    config
        .label_indices()
        .into_iter()
        .map(|index| render_label(config, index))
        .collect()
}

/// Render every sheet regardless of the preview selection.
pub fn render_all_labels(config: &LabelConfiguration) -> Vec<RenderedLabel> {
    (1..=config.label_count())
        .map(|index| render_label(config, index))
        .collect()
}
