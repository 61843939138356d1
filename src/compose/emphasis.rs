//! Emphasized text: prose with highlighted spans tracked structurally.
//!
//! A composed sentence is a sequence of segments. Dynamic values are pushed
//! as their own segments while the sentence is assembled, so every value owns
//! exactly one span no matter what digits it shares with its neighbours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stand-in for a value that is still being edited.
pub const PLACEHOLDER: &str = "____";

/// Configuration field a dynamic segment was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ShakeCount,
    DropsPerDose,
    IntervalValue,
    MixtureOrdinal,
    MixtureAmount,
    DurationDays,
}

/// One piece of composed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Template text.
    Plain { text: String },
    /// A substituted value, to be highlighted.
    Emphasis { field: Field, text: String },
    /// A value in the empty editing state.
    Placeholder { field: Field },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Emphasis { text, .. } => text,
            Segment::Placeholder { .. } => PLACEHOLDER,
        }
    }

    pub fn is_emphasis(&self) -> bool {
        matches!(self, Segment::Emphasis { .. })
    }
}

/// An emphasized range of [`EmphasizedText::plain_text`], in byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmphasisSpan {
    pub field: Field,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Composed prose with emphasis as a first-class attribute of its segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasizedText {
    segments: Vec<Segment>,
}

impl EmphasizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append template text, merging with a preceding plain segment.
    pub fn push_plain(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Plain { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Plain { text: text.to_string() });
        }
    }

    /// Append a field value: emphasized when present and non-blank, a
    /// placeholder otherwise.
    pub fn push_value(&mut self, field: Field, value: Option<String>) {
        match value {
            Some(text) if !text.trim().is_empty() => {
                self.segments.push(Segment::Emphasis { field, text });
            }
            _ => self.segments.push(Segment::Placeholder { field }),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The text with all markup dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Emphasis spans over [`plain_text`](Self::plain_text), in order.
    pub fn spans(&self) -> Vec<EmphasisSpan> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for segment in &self.segments {
            let text = segment.text();
            if let Segment::Emphasis { field, .. } = segment {
                spans.push(EmphasisSpan {
                    field: *field,
                    start: offset,
                    end: offset + text.len(),
                    text: text.to_string(),
                });
            }
            offset += text.len();
        }
        spans
    }

    pub fn emphasis_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_emphasis()).count()
    }

    /// The emphasized text for `field`, if any.
    pub fn value_of(&self, field: Field) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Emphasis { field: f, text } if *f == field => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether `field` is rendered as a placeholder.
    pub fn is_placeholder(&self, field: Field) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder { field: f } if *f == field))
    }
}

impl fmt::Display for EmphasizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_segments_merge() {
        let mut text = EmphasizedText::new();
        text.push_plain("a");
        text.push_plain("b");
        text.push_plain("");
        assert_eq!(text.segments().len(), 1);
        assert_eq!(text.plain_text(), "ab");
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let mut text = EmphasizedText::new();
        text.push_plain("নিন ");
        text.push_value(Field::DropsPerDose, Some("৫".into()));
        text.push_plain(" ফোঁটা");

        let plain = text.plain_text();
        let spans = text.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(&plain[spans[0].start..spans[0].end], "৫");
        assert_eq!(spans[0].field, Field::DropsPerDose);
    }

    #[test]
    fn test_blank_value_is_placeholder() {
        let mut text = EmphasizedText::new();
        text.push_value(Field::DurationDays, None);
        text.push_value(Field::MixtureAmount, Some("  ".into()));
        assert_eq!(text.emphasis_count(), 0);
        assert!(text.is_placeholder(Field::DurationDays));
        assert!(text.is_placeholder(Field::MixtureAmount));
        assert_eq!(text.to_string(), format!("{PLACEHOLDER}{PLACEHOLDER}"));
    }
}
