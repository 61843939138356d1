//! # Text Components
//!
//! Components for displaying text with various styles.

use super::Component;
use crate::compose::{EmphasizedText, Segment};
use crate::markup::{Element, Node};

/// A block of text with optional classes.
///
/// ## Example
///
/// ```
/// use doselabel::components::*;
///
/// // Simple text
/// let text = Line::new("কোটালীপাড়া, গোপালগঞ্জ");
///
/// // Styled text
/// let styled = Line::new("ত্রিফুল আরোগ্য নিকেতন").bold().small();
/// ```
pub struct Line {
    content: String,
    tag: &'static str,
    classes: Vec<&'static str>,
}

impl Line {
    /// Create a paragraph line.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: "p",
            classes: Vec::new(),
        }
    }

    /// Create inline text (a `span`).
    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            tag: "span",
            ..Self::new(content)
        }
    }

    /// Add a class.
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Make text bold.
    pub fn bold(self) -> Self {
        self.class("bold")
    }

    /// Smaller type.
    pub fn small(self) -> Self {
        self.class("small")
    }

    /// Center the text.
    pub fn center(self) -> Self {
        self.class("center")
    }
}

impl Component for Line {
    fn emit(&self, nodes: &mut Vec<Node>) {
        let mut element = Element::new(self.tag);
        for class in &self.classes {
            element = element.class(class);
        }
        nodes.push(element.text(self.content.clone()).into());
    }
}

/// Heading level used on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Main section title ("ঔষধ খাবার নিয়মাবলী").
    Section,
    /// Secondary title ("পরামর্শ").
    Subsection,
}

/// A centered, underlined heading.
///
/// ## Example
///
/// ```
/// use doselabel::components::Heading;
///
/// let heading = Heading::section("ঔষধ খাবার নিয়মাবলী");
/// ```
pub struct Heading {
    content: String,
    level: HeadingLevel,
}

impl Heading {
    pub fn section(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            level: HeadingLevel::Section,
        }
    }

    pub fn subsection(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            level: HeadingLevel::Subsection,
        }
    }
}

impl Component for Heading {
    fn emit(&self, nodes: &mut Vec<Node>) {
        let (tag, class) = match self.level {
            HeadingLevel::Section => ("h2", "section-title"),
            HeadingLevel::Subsection => ("h3", "subsection-title"),
        };
        nodes.push(
            Element::new("div")
                .class("center")
                .child(Element::new(tag).class(class).text(self.content.clone()))
                .into(),
        );
    }
}

/// Label text followed by a highlighted value: "ক্রমিক নং: **F/12**".
pub struct LabeledValue {
    label: String,
    value: String,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Component for LabeledValue {
    fn emit(&self, nodes: &mut Vec<Node>) {
        nodes.push(
            Element::new("span")
                .class("field")
                .text(format!("{} ", self.label))
                .child(Element::new("strong").class("field-value").text(self.value.clone()))
                .into(),
        );
    }
}

/// A paragraph of [`EmphasizedText`]: emphasized segments become
/// `strong.emphasis`, placeholders become `span.placeholder`.
pub struct Emphasized {
    text: EmphasizedText,
    class: &'static str,
}

impl Emphasized {
    pub fn new(text: EmphasizedText) -> Self {
        Self {
            text,
            class: "instruction",
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }
}

impl Component for Emphasized {
    fn emit(&self, nodes: &mut Vec<Node>) {
        let mut paragraph = Element::new("p").class(self.class);
        for segment in self.text.segments() {
            paragraph = match segment {
                Segment::Plain { text } => paragraph.text(text.clone()),
                Segment::Emphasis { text, .. } => {
                    paragraph.child(Element::new("strong").class("emphasis").text(text.clone()))
                }
                Segment::Placeholder { .. } => paragraph.child(
                    Element::new("span")
                        .class("placeholder")
                        .text(segment.text()),
                ),
            };
        }
        nodes.push(paragraph.into());
    }
}
