//! # Counseling List
//!
//! The bullet list printed under "পরামর্শ" on every sheet: the user's
//! entries (predefined or custom) followed by one synthesized follow-up line.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::emphasis::PLACEHOLDER;
use crate::numerals::localize_numerals;

/// Bullet glyph every entry starts with.
pub const BULLET: char = '•';

/// Leading glyphs accepted as a bullet and rewritten to [`BULLET`].
const BULLET_GLYPHS: &[char] = &['•', '❖', '-'];

/// Entries present in a fresh configuration.
pub const DEFAULT_COUNSELING: [&str; 3] = [
    "• ঔষধ সেবনকালীন যাবতীয় ঔষধি নিষিদ্ধ।",
    "• ঔষধ সেবনের আধা ঘন্টা আগে-পরে জল ব্যতিত কোন খাবার খাবেন না।",
    "• জরুরী প্রয়োজনে বিকাল ৫টা থেকে ৭টার মধ্যে ফোন করুন।",
];

/// Catalog the form offers for quick insertion.
pub const PREDEFINED_COUNSELING: [&str; 8] = [
    "• টক জাতীয় খাবার খাবেন না।",
    "• কাঁচা পিয়াজ-রসুন খাবেন না।",
    "• এলার্জিযুক্ত সকল খাবার খাবেন।",
    "• রাত্রি জাগরণ করবেন না।",
    "• নিয়মিত প্রেসার/ডায়াবেটিসের ঔষধ খাবেন।",
    "• ঠান্ডা জাতীয় খাবার খাবেন না।",
    "• বমি, পাতলা পায়খানা, সর্দি হলে অবশ্যই জানাবেন।",
    "• অতিরিক্ত দেয়া ঔষধ ফোন না করে খাবেন না।",
];

/// Normalize an entry to start with exactly one bullet.
///
/// Returns `None` for blank input (including a lone bullet).
///
/// ```
/// use doselabel::compose::normalize_entry;
///
/// assert_eq!(normalize_entry("  drink water "), Some("• drink water".into()));
/// assert_eq!(normalize_entry("❖drink water"), Some("• drink water".into()));
/// assert_eq!(normalize_entry(" • "), None);
/// ```
pub fn normalize_entry(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(BULLET_GLYPHS)
        .unwrap_or(trimmed)
        .trim_start();
    if body.is_empty() {
        None
    } else {
        Some(format!("{} {}", BULLET, body))
    }
}

/// The synthesized last entry: come back after `follow_up_days` days.
pub fn follow_up_entry(follow_up_days: Option<NonZeroU32>) -> String {
    let days = follow_up_days.map_or_else(|| PLACEHOLDER.to_string(), localize_numerals);
    format!("{} {} দিন পরে আসবেন।", BULLET, days)
}

/// Build the printed counseling list.
///
/// Every entry is bullet-normalized and numeral-localized, in the given
/// order; the follow-up entry is always appended last, so the result has
/// exactly `entries.len() + 1` items.
pub fn build_counseling_list(
    entries: &[String],
    follow_up_days: Option<NonZeroU32>,
) -> Vec<String> {
    let mut list: Vec<String> = entries
        .iter()
        .map(|entry| {
            let normalized = normalize_entry(entry).unwrap_or_else(|| BULLET.to_string());
            localize_numerals(normalized)
        })
        .collect();
    list.push(follow_up_entry(follow_up_days));
    list
}

/// Ordered, duplicate-free list of counseling entries.
///
/// Entries are stored in normalized form. Adding an entry that is already
/// present is a no-op; removing by a stale index is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CounselingList {
    entries: Vec<String>,
}

impl CounselingList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries a fresh configuration starts with.
    pub fn defaults() -> Self {
        DEFAULT_COUNSELING.iter().copied().collect()
    }

    /// Add an entry. Returns `true` if the list changed.
    pub fn add(&mut self, text: &str) -> bool {
        let Some(entry) = normalize_entry(text) else {
            return false;
        };
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry at `index`. Out-of-bounds indices leave the list
    /// unchanged and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Whether the normalized form of `text` is present.
    pub fn contains(&self, text: &str) -> bool {
        normalize_entry(text).is_some_and(|entry| self.entries.contains(&entry))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CounselingList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.add(entry.as_ref());
        }
        list
    }
}

impl From<Vec<String>> for CounselingList {
    fn from(entries: Vec<String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<CounselingList> for Vec<String> {
    fn from(list: CounselingList) -> Self {
        list.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn days(n: u32) -> Option<NonZeroU32> {
        NonZeroU32::new(n)
    }

    #[test]
    fn test_normalize_prepends_bullet() {
        assert_eq!(normalize_entry("খাবেন না"), Some("• খাবেন না".into()));
        assert_eq!(normalize_entry("• খাবেন না"), Some("• খাবেন না".into()));
        assert_eq!(normalize_entry("-খাবেন না"), Some("• খাবেন না".into()));
        assert_eq!(normalize_entry(""), None);
    }

    #[test]
    fn test_follow_up_only() {
        let list = build_counseling_list(&[], days(7));
        assert_eq!(list.len(), 1);
        assert!(list[0].contains('৭'));
        assert_eq!(list[0], "• ৭ দিন পরে আসবেন।");
    }

    #[test]
    fn test_follow_up_placeholder() {
        let list = build_counseling_list(&[], None);
        assert_eq!(list, vec![format!("• {} দিন পরে আসবেন।", PLACEHOLDER)]);
    }

    #[test]
    fn test_entries_localized_and_ordered() {
        let entries = vec!["call 5 to 7pm".to_string(), "• rest".to_string()];
        let list = build_counseling_list(&entries, days(14));
        assert_eq!(
            list,
            vec![
                "• call ৫ to ৭pm".to_string(),
                "• rest".to_string(),
                "• ১৪ দিন পরে আসবেন।".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut list = CounselingList::defaults();
        let before = list.len();
        assert!(!list.add(DEFAULT_COUNSELING[0]));
        // Same entry without its bullet normalizes to the same string
        assert!(!list.add(DEFAULT_COUNSELING[1].trim_start_matches('•')));
        assert_eq!(list.len(), before);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = CounselingList::new();
        assert!(list.add("b"));
        assert!(list.add("a"));
        assert!(!list.add("b"));
        assert_eq!(list.entries(), &["• b".to_string(), "• a".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = CounselingList::defaults();
        let before = list.clone();
        assert_eq!(list.remove(3), None);
        assert_eq!(list.remove(usize::MAX), None);
        assert_eq!(list, before);
        assert_eq!(list.remove(0).as_deref(), Some(DEFAULT_COUNSELING[0]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_deserialize_dedupes() {
        let list: CounselingList = serde_json::from_str(r#"["a", "• a", "b", ""]"#).unwrap();
        assert_eq!(list.entries(), &["• a".to_string(), "• b".to_string()]);
    }

    proptest! {
        #[test]
        fn counseling_length_is_entries_plus_one(
            entries in proptest::collection::vec("\\PC{0,20}", 0..8),
            follow_up in 0u32..60,
        ) {
            let list = build_counseling_list(&entries, NonZeroU32::new(follow_up));
            prop_assert_eq!(list.len(), entries.len() + 1);
            let last = list.last().unwrap();
            let expected = follow_up_entry(NonZeroU32::new(follow_up));
            prop_assert_eq!(last, &expected);
        }
    }
}
