//! # Label Sheet
//!
//! The root container for one prescription sheet.

use super::{
    ClinicFooter, Component, CounselingBlock, InstructionBox, SequenceBadge, SheetHeader,
    compile_children,
};
use crate::clinic::ClinicProfile;
use crate::label::RenderedLabel;
use crate::markup::{Element, Node};

/// LabelSheet is the root container component.
///
/// It holds child components and wraps them in a single
/// `div.prescription-sheet`.
///
/// ## Example
///
/// ```
/// use doselabel::components::*;
///
/// let sheet = LabelSheet::new()
///     .child(Heading::section("ঔষধ খাবার নিয়মাবলী"))
///     .child(Heading::subsection("পরামর্শ"));
///
/// let html = sheet.to_html();
/// ```
pub struct LabelSheet {
    children: Vec<Box<dyn Component>>,
}

impl Default for LabelSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelSheet {
    /// Create a new empty sheet.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// The standard sheet layout for a rendered label.
    pub fn for_label(label: &RenderedLabel, clinic: &ClinicProfile) -> Self {
        let mut sheet = Self::new().child(SheetHeader::new(label.header.clone()));
        if let Some(sequence) = &label.sequence {
            sheet = sheet.child(SequenceBadge::new(sequence.clone()));
        }
        sheet
            .child(InstructionBox::new(label.instruction.clone()))
            .child(CounselingBlock::new(label.counseling.clone()))
            .child(ClinicFooter::new(clinic.clone()))
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }
}

impl Component for LabelSheet {
    fn emit(&self, nodes: &mut Vec<Node>) {
        nodes.push(
            Element::new("div")
                .class("prescription-sheet")
                .children(compile_children(&self.children))
                .into(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Line};
    use crate::config::{FieldUpdate, LabelConfiguration};
    use crate::label::render_label;
    use chrono::NaiveDate;

    fn config() -> LabelConfiguration {
        LabelConfiguration::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_empty_sheet() {
        let html = LabelSheet::new().to_html();
        assert_eq!(html, r#"<div class="prescription-sheet"></div>"#);
    }

    #[test]
    fn test_children_in_order() {
        let nodes = LabelSheet::new()
            .children([Line::new("a"), Line::new("b")])
            .compile();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text_content(), "ab");
    }

    #[test]
    fn test_single_label_has_no_badge() {
        let label = render_label(&config(), 1);
        let nodes = LabelSheet::for_label(&label, &ClinicProfile::default()).compile();
        assert!(nodes[0].find_all_by_class("sequence-badge").is_empty());
        assert_eq!(nodes[0].find_all_by_class("instruction").len(), 1);
        // shake, drops, interval, mixture, days
        assert_eq!(nodes[0].find_all_by_class("emphasis").len(), 5);
        assert!(!nodes[0].text_content().contains("শিশি থেকে"));
    }

    #[test]
    fn test_multi_label_has_badge() {
        let mut config = config();
        config.apply(FieldUpdate::LabelCount(2u32.into()));
        let label = render_label(&config, 2);
        let nodes = LabelSheet::for_label(&label, &ClinicProfile::default()).compile();
        let badge = nodes[0].find_all_by_class("sequence-badge");
        assert_eq!(badge.len(), 1);
        assert_eq!(badge[0].text_content(), "২ নং ঔষধ (২ টির মধ্যে)");
    }
}
