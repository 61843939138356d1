//! # Instruction Composer
//!
//! Builds the dosage instruction sentence printed under "ঔষধ খাবার নিয়মাবলী".
//!
//! Two templates exist, picked by [`ShakeMode`]. Every dynamic value is
//! localized on its own and pushed as its own segment, so two fields that
//! happen to share a numeral (drops = interval = 5) still get one span each,
//! and template literals such as "১ কাপ" are never highlighted.

use super::emphasis::{EmphasizedText, Field};
use crate::config::{LabelConfiguration, ShakeMode};
use crate::numerals::{bangla_ordinal, localize_numerals};

/// The clause only the shaking template contains.
pub const SHAKE_CLAUSE: &str = "বার ঝাঁকি দিয়ে";

/// Compose the instruction sentence for `config`.
///
/// Never fails; empty dosage fields render as placeholders.
pub fn compose_instruction(config: &LabelConfiguration) -> EmphasizedText {
    let drops = config.drops_per_dose.map(localize_numerals);
    let interval = config.interval_value.map(localize_numerals);
    let shake = config.shake_count.map(localize_numerals);
    let days = config.duration_days.map(localize_numerals);

    let mut text = EmphasizedText::new();

    match config.shake_mode {
        ShakeMode::With => {
            text.push_plain("ঔষধ সেবনের আগে শিশিটিকে হাতের তালুর উপরে দূর হতে সজোরে থেমে থেমে ");
            text.push_value(Field::ShakeCount, shake);
            text.push_plain(format!(" {} ", SHAKE_CLAUSE));
            text.push_value(Field::DropsPerDose, drops);
            text.push_plain(" ফোঁটা ঔষধ ১ কাপ ঠান্ডা জলের সাথে চামচ দিয়ে ভালোভাবে মিশিয়ে নিয়ে ");
        }
        ShakeMode::Without => {
            text.push_plain("প্রতিবার ঔষধ সেবনের পূর্বে ");
            text.push_value(Field::DropsPerDose, drops);
            text.push_plain(" ফোঁটা ঔষধ এক কাপ ঠান্ডা জলের সাথে চামচ দিয়ে ভালভাবে মিশিয়ে নিয়ে ");
        }
    }

    text.push_value(Field::IntervalValue, interval);
    text.push_plain(format!(" {} অন্তর ", config.interval_unit.noun()));

    if let Some(ordinal) = config.mixture_ordinal.as_deref().map(str::trim)
        && !ordinal.is_empty()
    {
        // A bare number such as "2" reads as the ordinal "২য়".
        let ordinal = match ordinal.parse::<u32>() {
            Ok(n) if n > 0 => bangla_ordinal(n),
            _ => localize_numerals(ordinal),
        };
        text.push_value(Field::MixtureOrdinal, Some(ordinal));
        text.push_plain(" শিশি থেকে ");
    }

    text.push_value(Field::MixtureAmount, Some(config.mixture_amount.phrase()));
    text.push_plain(" করে ");
    text.push_value(Field::DurationDays, days);
    text.push_plain(" দিন সেবন করবেন।");

    tracing::debug!(
        mode = ?config.shake_mode,
        spans = text.emphasis_count(),
        "composed instruction"
    );
    text
}
