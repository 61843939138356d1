//! # Label Pipeline Tests
//!
//! End-to-end: configuration → rendered labels → preview document → print
//! compositor → facility.

use chrono::NaiveDate;
use doselabel::clinic::ClinicProfile;
use doselabel::compose::{Field, SHAKE_CLAUSE, SequenceOrder, build_counseling_list};
use doselabel::config::{FieldUpdate, LabelConfiguration, ShakeMode, StateCache};
use doselabel::label::{render_all_labels, render_labels};
use doselabel::markup::HostDocument;
use doselabel::numerals::localize_numerals;
use doselabel::preview::{preview_document, printable_fragments};
use doselabel::printer::{PRINT_PAGE_CLASS, PRINT_ROOT_ID, PrintOutcome, SheetConfig, print_labels};
use doselabel::session::Session;
use doselabel::transport::{HtmlFileFacility, PrintFacility, PrintStatus};
use doselabel::LabelError;
use pretty_assertions::assert_eq;
use std::num::NonZeroU32;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// How a [`Recorder`] responds when asked to print.
#[derive(Clone, Copy)]
enum Response {
    Submit,
    Cancel,
    Fail,
    Panic,
}

/// Records what was handed to it.
struct Recorder {
    response: Response,
    calls: usize,
    root_present: bool,
    pages: Vec<String>,
}

impl Recorder {
    fn new(response: Response) -> Self {
        Self {
            response,
            calls: 0,
            root_present: false,
            pages: Vec::new(),
        }
    }
}

impl PrintFacility for Recorder {
    fn print(&mut self, document: &HostDocument) -> Result<PrintStatus, LabelError> {
        self.calls += 1;
        self.root_present = document.contains_id(PRINT_ROOT_ID);
        self.pages = document
            .find_all_by_class(PRINT_PAGE_CLASS)
            .iter()
            .map(|page| {
                page.find_all_by_class("sequence-badge")
                    .first()
                    .map(|badge| badge.text_content())
                    .unwrap_or_default()
            })
            .collect();

        match self.response {
            Response::Submit => Ok(PrintStatus::Submitted),
            Response::Cancel => Ok(PrintStatus::Cancelled),
            Response::Fail => Err(LabelError::Print("paper jam".into())),
            Response::Panic => panic!("print dialog crashed"),
        }
    }
}

fn config() -> LabelConfiguration {
    LabelConfiguration::new(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
}

fn three_label_document() -> HostDocument {
    let mut config = config();
    config.apply(FieldUpdate::LabelCount(3u32.into()));
    preview_document(
        &render_all_labels(&config),
        &ClinicProfile::default(),
        &SheetConfig::default(),
    )
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn test_shared_values_emphasized_separately() {
    let mut config = config();
    config.apply(FieldUpdate::DropsPerDose(5u32.into()));
    config.apply(FieldUpdate::IntervalValue("5".into()));
    config.apply(FieldUpdate::ShakeCount(5u32.into()));

    let label = &render_labels(&config)[0];
    let spans: Vec<_> = label
        .instruction
        .spans()
        .into_iter()
        .filter(|span| span.text == "৫")
        .collect();

    assert_eq!(spans.len(), 3);
    let plain = label.instruction.plain_text();
    for span in &spans {
        assert_eq!(&plain[span.start..span.end], "৫");
    }
}

#[test]
fn test_without_shake_never_mentions_shaking() {
    let mut config = config();
    config.apply(FieldUpdate::ShakeMode(ShakeMode::Without));
    config.apply(FieldUpdate::ShakeCount(99u32.into()));

    let text = render_labels(&config)[0].instruction.plain_text();
    assert!(!text.contains(SHAKE_CLAUSE));
    assert!(!text.contains("৯৯"));
}

#[test]
fn test_cleared_field_renders_placeholder() {
    let mut config = config();
    config.apply(FieldUpdate::DurationDays("".into()));

    let label = &render_labels(&config)[0];
    assert!(label.instruction.is_placeholder(Field::DurationDays));
    assert!(label.instruction.plain_text().contains("____ দিন সেবন করবেন।"));
}

#[test]
fn test_sequence_of_three() {
    let mut config = config();
    config.apply(FieldUpdate::LabelCount(3u32.into()));
    config.apply(FieldUpdate::ActiveLabelIndex(2u32.into()));

    let label = &render_labels(&config)[0];
    let sequence = label.sequence.as_ref().unwrap();
    assert_eq!(sequence.heading, "২ নং ঔষধ (৩ টির মধ্যে)");
    assert_eq!(sequence.order, SequenceOrder::After { previous: 1 });
    assert_eq!(sequence.clause, "১ নং ঔষধ শেষ হলে এটি সেবন করবেন");
}

#[test]
fn test_shrinking_count_clamps_active_index() {
    let mut config = config();
    config.apply(FieldUpdate::LabelCount(5u32.into()));
    config.apply(FieldUpdate::ActiveLabelIndex(5u32.into()));
    config.apply(FieldUpdate::LabelCount(2u32.into()));

    assert_eq!(config.active_label_index(), 2);
    assert_eq!(render_labels(&config)[0].index, 2);
}

#[test]
fn test_follow_up_only() {
    let list = build_counseling_list(&[], NonZeroU32::new(7));
    assert_eq!(list, vec!["• ৭ দিন পরে আসবেন।".to_string()]);
    assert_eq!(localize_numerals("7"), "৭");
}

#[test]
fn test_counseling_edits_flow_to_label() {
    let mut config = config();
    config.apply(FieldUpdate::AddCounseling("❖ দিনে 2 বার হাঁটবেন".into()));
    config.apply(FieldUpdate::AddCounseling("• দিনে 2 বার হাঁটবেন".into()));
    config.apply(FieldUpdate::RemoveCounseling(0u32.into()));
    config.apply(FieldUpdate::RemoveCounseling(99u32.into()));

    let counseling = &render_labels(&config)[0].counseling;
    // two remaining defaults, the custom entry, follow-up
    assert_eq!(counseling.len(), 4);
    assert_eq!(counseling[2], "• দিনে ২ বার হাঁটবেন");
    assert!(counseling[3].contains('৭'));
}

// ============================================================================
// PRINT COMPOSITION
// ============================================================================

#[test]
fn test_three_sheets_in_order() {
    let mut doc = three_label_document();
    let before = doc.clone();
    let fragments = printable_fragments(&doc);
    let mut recorder = Recorder::new(Response::Submit);

    assert!(!doc.contains_id(PRINT_ROOT_ID));
    let outcome = print_labels(&mut doc, &fragments, &mut recorder).unwrap();

    assert_eq!(outcome, PrintOutcome::Printed { sheets: 3 });
    assert!(recorder.root_present);
    assert_eq!(
        recorder.pages,
        vec![
            "১ নং ঔষধ (৩ টির মধ্যে)",
            "২ নং ঔষধ (৩ টির মধ্যে)",
            "৩ নং ঔষধ (৩ টির মধ্যে)",
        ]
    );
    assert!(!doc.contains_id(PRINT_ROOT_ID));
    assert_eq!(doc, before);
}

#[test]
fn test_cancelled_print_cleans_up() {
    let mut doc = three_label_document();
    let fragments = printable_fragments(&doc);
    let mut recorder = Recorder::new(Response::Cancel);

    let outcome = print_labels(&mut doc, &fragments, &mut recorder).unwrap();
    assert_eq!(outcome, PrintOutcome::Cancelled);
    assert!(!doc.contains_id(PRINT_ROOT_ID));
}

#[test]
fn test_failed_print_cleans_up_and_reports() {
    let mut doc = three_label_document();
    let fragments = printable_fragments(&doc);
    let mut recorder = Recorder::new(Response::Fail);

    let err = print_labels(&mut doc, &fragments, &mut recorder).unwrap_err();
    assert_eq!(err.to_string(), "Print error: paper jam");
    assert_eq!(recorder.calls, 1);
    assert!(!doc.contains_id(PRINT_ROOT_ID));
}

#[test]
fn test_panicking_print_cleans_up() {
    let mut doc = three_label_document();
    let fragments = printable_fragments(&doc);
    let mut recorder = Recorder::new(Response::Panic);

    let result = catch_unwind(AssertUnwindSafe(|| {
        print_labels(&mut doc, &fragments, &mut recorder)
    }));
    assert!(result.is_err());
    assert!(!doc.contains_id(PRINT_ROOT_ID));
}

#[test]
fn test_nothing_to_print() {
    let mut doc = preview_document(&[], &ClinicProfile::default(), &SheetConfig::default());
    let mut recorder = Recorder::new(Response::Submit);

    let outcome = print_labels(&mut doc, &[], &mut recorder).unwrap();
    assert_eq!(outcome, PrintOutcome::Skipped);
    assert_eq!(recorder.calls, 0);
}

#[test]
fn test_print_to_file_sizes_every_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.html");

    let mut session = Session::new(config()).with_sheet(SheetConfig::inches(4.0, 6.0));
    session.apply(FieldUpdate::LabelCount(2u32.into()));
    session.apply(FieldUpdate::ShowAllPreviews(true));

    let outcome = session.print(&mut HtmlFileFacility::new(&path)).unwrap();
    assert_eq!(outcome, PrintOutcome::Printed { sheets: 2 });

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("@page { size: 4in 6in; margin: 0; }"));
    assert_eq!(html.matches(r#"<div class="print-page">"#).count(), 2);
    assert!(html.contains(r#"<div id="printable-content">"#));
}

// ============================================================================
// STATE CACHE
// ============================================================================

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let cache = StateCache::new(dir.path().join("state.json"));

    {
        let mut session = Session::restore(cache.clone());
        session.apply(FieldUpdate::LabelCount(4u32.into()));
        session.apply(FieldUpdate::ActiveLabelIndex(3u32.into()));
    }

    let session = Session::restore(cache);
    assert_eq!(session.config().label_count(), 4);
    assert_eq!(session.config().active_label_index(), 3);
}

#[test]
fn test_corrupt_cache_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json").unwrap();

    let session = Session::restore(StateCache::new(path));
    assert_eq!(session.config().serial_number, "F/");
}
