//! # Label Configuration
//!
//! The single record every label is rendered from.
//!
//! ## Invariants
//!
//! - `label_count` is always in `1..=MAX_LABEL_COUNT`
//! - `active_label_index` is always in `1..=label_count`
//! - counseling entries are normalized and duplicate-free
//! - dosage fields are either a positive integer or empty (`None`); empty
//!   renders as a placeholder, never as zero
//!
//! The count, the active index and the counseling list are private so they
//! can only change through [`FieldUpdate`]s, which keep the invariants.
//!
//! ```
//! use doselabel::config::{FieldUpdate, LabelConfiguration};
//!
//! let mut config = LabelConfiguration::default();
//! config.apply(FieldUpdate::LabelCount("3".into()));
//! config.apply(FieldUpdate::ActiveLabelIndex(3u32.into()));
//! config.apply(FieldUpdate::LabelCount("2".into()));
//! assert_eq!(config.active_label_index(), 2);
//! ```

mod cache;
mod input;
mod update;

pub use cache::StateCache;
pub use input::{
    MAX_LABEL_COUNT, NumericInput, coerce_label_count, coerce_label_index, resolve_amount,
    resolve_position,
};
pub use update::FieldUpdate;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::compose::CounselingList;
use crate::numerals::localize_numerals;
use input::{deserialize_amount, deserialize_label_count, deserialize_label_index};

/// Whether the vial is shaken before each dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeMode {
    #[default]
    With,
    Without,
}

/// Unit of the dosing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    #[default]
    Hours,
    Days,
}

impl IntervalUnit {
    /// Bangla noun used in the instruction sentence.
    pub fn noun(self) -> &'static str {
        match self {
            IntervalUnit::Hours => "ঘন্টা",
            IntervalUnit::Days => "দিন",
        }
    }
}

/// How much of the prepared mixture is taken per dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixtureAmount {
    /// N spoons of the mixture.
    Spoons(u8),
    /// The whole mixture.
    All,
    /// Free-text phrase.
    Other(String),
}

impl Default for MixtureAmount {
    fn default() -> Self {
        MixtureAmount::Spoons(1)
    }
}

impl MixtureAmount {
    /// Choices offered by the form, served at `/api/label/mixture-choices`.
    pub const CHOICES: [MixtureAmount; 4] = [
        MixtureAmount::Spoons(1),
        MixtureAmount::Spoons(2),
        MixtureAmount::Spoons(3),
        MixtureAmount::All,
    ];

    /// Localized phrase as printed, e.g. "১ চামচ ঔষধ".
    pub fn phrase(&self) -> String {
        match self {
            MixtureAmount::Spoons(n) => format!("{} চামচ ঔষধ", localize_numerals((*n).max(1))),
            MixtureAmount::All => "সবটুকু ঔষধ".to_string(),
            MixtureAmount::Other(text) => localize_numerals(text.trim()),
        }
    }
}

/// Everything a label is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfiguration {
    /// Free-text patient/record identifier.
    pub serial_number: String,
    pub patient_name: String,
    /// Label issue date.
    pub date: NaiveDate,
    pub shake_mode: ShakeMode,
    #[serde(deserialize_with = "deserialize_amount")]
    pub drops_per_dose: Option<NonZeroU32>,
    /// Only printed with [`ShakeMode::With`].
    #[serde(deserialize_with = "deserialize_amount")]
    pub shake_count: Option<NonZeroU32>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub interval_value: Option<NonZeroU32>,
    pub interval_unit: IntervalUnit,
    pub mixture_amount: MixtureAmount,
    /// Which numbered bottle to draw from when several are in use. Unset for
    /// a single bottle.
    pub mixture_ordinal: Option<String>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub duration_days: Option<NonZeroU32>,
    counseling_entries: CounselingList,
    #[serde(deserialize_with = "deserialize_amount")]
    pub follow_up_days: Option<NonZeroU32>,
    #[serde(deserialize_with = "deserialize_label_count")]
    label_count: u32,
    pub show_all_previews: bool,
    #[serde(deserialize_with = "deserialize_label_index")]
    active_label_index: u32,
}

impl Default for LabelConfiguration {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl LabelConfiguration {
    /// Default configuration issued on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            serial_number: "F/".to_string(),
            patient_name: String::new(),
            date,
            shake_mode: ShakeMode::With,
            drops_per_dose: NonZeroU32::new(3),
            shake_count: NonZeroU32::new(10),
            interval_value: NonZeroU32::new(12),
            interval_unit: IntervalUnit::Hours,
            mixture_amount: MixtureAmount::default(),
            mixture_ordinal: None,
            duration_days: NonZeroU32::new(7),
            counseling_entries: CounselingList::defaults(),
            follow_up_days: NonZeroU32::new(7),
            label_count: 1,
            show_all_previews: false,
            active_label_index: 1,
        }
    }

    /// Number of sheets to produce. Always at least 1.
    pub fn label_count(&self) -> u32 {
        self.label_count.clamp(1, MAX_LABEL_COUNT)
    }

    /// Sheet currently previewed, within `1..=label_count`.
    pub fn active_label_index(&self) -> u32 {
        self.active_label_index.clamp(1, self.label_count())
    }

    pub fn counseling(&self) -> &CounselingList {
        &self.counseling_entries
    }

    /// Sheet indices to render: every sheet when showing all previews,
    /// otherwise just the active one.
    pub fn label_indices(&self) -> Vec<u32> {
        if self.show_all_previews {
            (1..=self.label_count()).collect()
        } else {
            vec![self.active_label_index()]
        }
    }

    /// Replace the counseling list wholesale.
    pub fn set_counseling(&mut self, entries: CounselingList) {
        self.counseling_entries = entries;
    }

    /// Set the label count and pull the active index back into range.
    pub(crate) fn set_label_count(&mut self, count: u32) {
        self.label_count = count.clamp(1, MAX_LABEL_COUNT);
        self.active_label_index = self.active_label_index();
    }

    pub(crate) fn set_active_label_index(&mut self, index: u32) {
        self.active_label_index = index.clamp(1, self.label_count());
    }

    pub(crate) fn counseling_mut(&mut self) -> &mut CounselingList {
        &mut self.counseling_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = LabelConfiguration::new(date());
        assert_eq!(config.serial_number, "F/");
        assert_eq!(config.shake_mode, ShakeMode::With);
        assert_eq!(config.drops_per_dose, NonZeroU32::new(3));
        assert_eq!(config.label_count(), 1);
        assert_eq!(config.active_label_index(), 1);
        assert_eq!(config.counseling().len(), 3);
        assert_eq!(config.mixture_ordinal, None);
        assert_eq!(config.label_indices(), vec![1]);
    }

    #[test]
    fn test_mixture_phrases() {
        assert_eq!(MixtureAmount::Spoons(1).phrase(), "১ চামচ ঔষধ");
        assert_eq!(MixtureAmount::Spoons(0).phrase(), "১ চামচ ঔষধ");
        assert_eq!(MixtureAmount::All.phrase(), "সবটুকু ঔষধ");
        assert_eq!(MixtureAmount::Other(" 2 cups ".into()).phrase(), "২ cups");
    }

    #[test]
    fn test_label_indices_show_all() {
        let mut config = LabelConfiguration::new(date());
        config.set_label_count(3);
        config.show_all_previews = true;
        assert_eq!(config.label_indices(), vec![1, 2, 3]);
    }

    #[test]
    fn test_deserialize_partial_and_lenient() {
        let json = r#"{
            "patient_name": "রহিম",
            "drops_per_dose": "",
            "interval_value": "6",
            "label_count": "-1",
            "active_label_index": 9,
            "counseling_entries": ["a", "a"],
            "shake_mode": "without",
            "mixture_amount": "all"
        }"#;
        let config: LabelConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.patient_name, "রহিম");
        assert_eq!(config.drops_per_dose, None);
        assert_eq!(config.interval_value, NonZeroU32::new(6));
        assert_eq!(config.label_count(), 1);
        assert_eq!(config.active_label_index(), 1);
        assert_eq!(config.counseling().len(), 1);
        assert_eq!(config.shake_mode, ShakeMode::Without);
        assert_eq!(config.mixture_amount, MixtureAmount::All);
        // Unspecified fields keep their defaults
        assert_eq!(config.duration_days, NonZeroU32::new(7));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = LabelConfiguration::new(date());
        let json = serde_json::to_string(&config).unwrap();
        let back: LabelConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
