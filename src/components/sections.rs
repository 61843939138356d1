//! # Sheet Sections
//!
//! The blocks a prescription sheet is made of, top to bottom: header fields,
//! sequence badge, instructions, counseling and the clinic footer.

use super::{BulletList, Component, ComponentExt, Emphasized, Heading, LabeledValue, Line, Row, Section};
use crate::clinic::ClinicProfile;
use crate::compose::{EmphasizedText, SequenceAnnotation};
use crate::label::LabelHeader;
use crate::markup::{Element, Node};
use crate::numerals::localize_numerals;

/// Serial number and date on one row, patient name below.
pub struct SheetHeader {
    header: LabelHeader,
}

impl SheetHeader {
    pub fn new(header: LabelHeader) -> Self {
        Self { header }
    }
}

impl Component for SheetHeader {
    fn emit(&self, nodes: &mut Vec<Node>) {
        Section::new("sheet-header")
            .child(Row::new(
                LabeledValue::new("ক্রমিক নং:", self.header.serial_number.clone()),
                LabeledValue::new("তারিখঃ", self.header.date.clone()),
            ))
            .child(
                Section::new("patient")
                    .child(LabeledValue::new("রোগীর নামঃ", self.header.patient_name.clone())),
            )
            .emit(nodes);
    }
}

/// Boxed "i নং ঔষধ (N টির মধ্যে)" badge with its take-order clause.
pub struct SequenceBadge {
    annotation: SequenceAnnotation,
}

impl SequenceBadge {
    pub fn new(annotation: SequenceAnnotation) -> Self {
        Self { annotation }
    }
}

impl Component for SequenceBadge {
    fn emit(&self, nodes: &mut Vec<Node>) {
        nodes.push(
            Element::new("div")
                .class("sequence center")
                .child(
                    Element::new("span")
                        .class("sequence-badge")
                        .text(self.annotation.heading.clone()),
                )
                .child(
                    Element::new("p")
                        .class("sequence-clause")
                        .text(self.annotation.clause.clone()),
                )
                .into(),
        );
    }
}

/// "ঔষধ খাবার নিয়মাবলী" heading over the composed instruction.
pub struct InstructionBox {
    instruction: EmphasizedText,
}

impl InstructionBox {
    pub fn new(instruction: EmphasizedText) -> Self {
        Self { instruction }
    }
}

impl Component for InstructionBox {
    fn emit(&self, nodes: &mut Vec<Node>) {
        Heading::section("ঔষধ খাবার নিয়মাবলী").emit(nodes);
        Section::new("instruction-box")
            .child(Emphasized::new(self.instruction.clone()))
            .emit(nodes);
    }
}

/// "পরামর্শ" heading over the counseling bullets.
pub struct CounselingBlock {
    entries: Vec<String>,
}

impl CounselingBlock {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl Component for CounselingBlock {
    fn emit(&self, nodes: &mut Vec<Node>) {
        Section::new("counseling")
            .child(Heading::subsection("পরামর্শ"))
            .child(BulletList::new(self.entries.iter().cloned()))
            .emit(nodes);
    }
}

/// Clinic and doctor details at the bottom of the sheet.
pub struct ClinicFooter {
    clinic: ClinicProfile,
}

impl ClinicFooter {
    pub fn new(clinic: ClinicProfile) -> Self {
        Self { clinic }
    }
}

impl Component for ClinicFooter {
    fn emit(&self, nodes: &mut Vec<Node>) {
        let clinic = &self.clinic;

        let doctor = Element::new("p")
            .class("bold")
            .text(format!("{} ", clinic.doctor))
            .child(Element::new("span").class("small").text(clinic.qualifications.clone()));

        let mut footer = Element::new("div")
            .class("doctor-info center")
            .children(Line::new(clinic.name.clone()).bold().compile())
            .children(Line::new(clinic.subtitle.clone()).small().compile())
            .child(doctor)
            .children(Line::new(clinic.speciality.clone()).small().compile())
            .children(Line::new(clinic.address.clone()).small().compile());

        if !clinic.phones.is_empty() {
            let phones: Vec<String> = clinic.phones.iter().map(localize_numerals).collect();
            footer = footer.children(
                Line::new(format!("মোবাইল: {}", phones.join(", ")))
                    .small()
                    .compile(),
            );
        }

        nodes.push(footer.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::sequence_label;

    fn header() -> LabelHeader {
        LabelHeader {
            serial_number: "F/12".into(),
            patient_name: "রহিম".into(),
            date: "০১/০১/২০২৫".into(),
        }
    }

    #[test]
    fn test_header_fields() {
        let nodes = SheetHeader::new(header()).compile();
        assert_eq!(nodes.len(), 1);
        let values: Vec<String> = nodes[0]
            .find_all_by_class("field-value")
            .iter()
            .map(|n| n.text_content())
            .collect();
        assert_eq!(values, vec!["F/12", "০১/০১/২০২৫", "রহিম"]);
    }

    #[test]
    fn test_sequence_badge() {
        let badge = SequenceBadge::new(sequence_label(2, 3).unwrap());
        let html = badge.to_html();
        assert!(html.contains("২ নং ঔষধ (৩ টির মধ্যে)"));
        assert!(html.contains("১ নং ঔষধ শেষ হলে এটি সেবন করবেন"));
    }

    #[test]
    fn test_counseling_block_keeps_order() {
        let nodes = CounselingBlock::new(vec!["• ক".into(), "• খ".into()]).compile();
        let items: Vec<String> = nodes[0]
            .find_all_by_class("advice-list")[0]
            .children()
            .iter()
            .map(|n| n.text_content())
            .collect();
        assert_eq!(items, vec!["• ক", "• খ"]);
    }

    #[test]
    fn test_footer_localizes_phones() {
        let html = ClinicFooter::new(ClinicProfile::default()).to_html();
        assert!(html.contains("মোবাইল: ০১৭১৬৯৫৪৬৯৯, ০১৯২২৭৮৮৪৬৬, ০১৮৭১৮১১১৮১"));
        assert!(html.contains("doctor-info"));
    }

    #[test]
    fn test_footer_without_phones() {
        let clinic = ClinicProfile {
            phones: Vec::new(),
            ..ClinicProfile::default()
        };
        assert!(!ClinicFooter::new(clinic).to_html().contains("মোবাইল"));
    }
}
