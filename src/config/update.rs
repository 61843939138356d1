//! Discrete field updates: the only way a configuration changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::input::{NumericInput, coerce_label_count, coerce_label_index, resolve_position};
use super::{IntervalUnit, LabelConfiguration, MixtureAmount, ShakeMode};

/// One form edit.
///
/// Serialized as `{"field": "...", "value": ...}`, which is also what the
/// HTTP API accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    SerialNumber(String),
    PatientName(String),
    Date(NaiveDate),
    ShakeMode(ShakeMode),
    DropsPerDose(NumericInput),
    ShakeCount(NumericInput),
    IntervalValue(NumericInput),
    IntervalUnit(IntervalUnit),
    MixtureAmount(MixtureAmount),
    MixtureOrdinal(Option<String>),
    DurationDays(NumericInput),
    FollowUpDays(NumericInput),
    LabelCount(NumericInput),
    ShowAllPreviews(bool),
    ActiveLabelIndex(NumericInput),
    AddCounseling(String),
    RemoveCounseling(NumericInput),
}

impl FieldUpdate {
    /// Name of the field this update targets, as it appears in JSON.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::SerialNumber(_) => "serial_number",
            FieldUpdate::PatientName(_) => "patient_name",
            FieldUpdate::Date(_) => "date",
            FieldUpdate::ShakeMode(_) => "shake_mode",
            FieldUpdate::DropsPerDose(_) => "drops_per_dose",
            FieldUpdate::ShakeCount(_) => "shake_count",
            FieldUpdate::IntervalValue(_) => "interval_value",
            FieldUpdate::IntervalUnit(_) => "interval_unit",
            FieldUpdate::MixtureAmount(_) => "mixture_amount",
            FieldUpdate::MixtureOrdinal(_) => "mixture_ordinal",
            FieldUpdate::DurationDays(_) => "duration_days",
            FieldUpdate::FollowUpDays(_) => "follow_up_days",
            FieldUpdate::LabelCount(_) => "label_count",
            FieldUpdate::ShowAllPreviews(_) => "show_all_previews",
            FieldUpdate::ActiveLabelIndex(_) => "active_label_index",
            FieldUpdate::AddCounseling(_) => "add_counseling",
            FieldUpdate::RemoveCounseling(_) => "remove_counseling",
        }
    }
}

impl LabelConfiguration {
    /// Apply one field update. Returns `true` if the configuration changed.
    ///
    /// Never fails: bad numeric input resolves to the empty state (dosage
    /// fields) or to 1 (label count, active index). The active index is
    /// clamped to the label count. Negative, non-numeric or stale counseling
    /// positions are ignored.
    pub fn apply(&mut self, update: FieldUpdate) -> bool {
        let field = update.field_name();
        let before = self.clone();
        match update {
            FieldUpdate::SerialNumber(value) => self.serial_number = value,
            FieldUpdate::PatientName(value) => self.patient_name = value,
            FieldUpdate::Date(value) => self.date = value,
            FieldUpdate::ShakeMode(value) => self.shake_mode = value,
            FieldUpdate::DropsPerDose(input) => self.drops_per_dose = input.resolve(),
            FieldUpdate::ShakeCount(input) => self.shake_count = input.resolve(),
            FieldUpdate::IntervalValue(input) => self.interval_value = input.resolve(),
            FieldUpdate::IntervalUnit(value) => self.interval_unit = value,
            FieldUpdate::MixtureAmount(value) => self.mixture_amount = value,
            FieldUpdate::MixtureOrdinal(value) => {
                self.mixture_ordinal = value.filter(|s| !s.trim().is_empty());
            }
            FieldUpdate::DurationDays(input) => self.duration_days = input.resolve(),
            FieldUpdate::FollowUpDays(input) => self.follow_up_days = input.resolve(),
            FieldUpdate::LabelCount(input) => self.set_label_count(coerce_label_count(&input)),
            FieldUpdate::ShowAllPreviews(value) => self.show_all_previews = value,
            FieldUpdate::ActiveLabelIndex(input) => {
                self.set_active_label_index(coerce_label_index(&input));
            }
            FieldUpdate::AddCounseling(text) => {
                self.counseling_mut().add(&text);
            }
            FieldUpdate::RemoveCounseling(input) => {
                if let Some(position) = resolve_position(&input) {
                    self.counseling_mut().remove(position);
                }
            }
        }
        let changed = *self != before;
        if changed {
            tracing::debug!(field, "configuration updated");
        }
        changed
    }
}
