//! # Editor Session
//!
//! One label being edited: its configuration plus everything needed to
//! preview and print it. Every mutation goes through [`Session::apply`], and
//! a changed configuration is written to the state cache when one is set.

use crate::clinic::ClinicProfile;
use crate::config::{FieldUpdate, LabelConfiguration, StateCache};
use crate::error::LabelError;
use crate::label::{RenderedLabel, render_labels};
use crate::markup::HostDocument;
use crate::preview::{preview_document, printable_fragments};
use crate::printer::{PrintOutcome, SheetConfig, print_labels};
use crate::transport::PrintFacility;

/// A label editing session.
///
/// ## Example
///
/// ```
/// use doselabel::config::FieldUpdate;
/// use doselabel::session::Session;
///
/// let mut session = Session::default();
/// session.apply(FieldUpdate::PatientName("রহিম".into()));
/// assert_eq!(session.render()[0].header.patient_name, "রহিম");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: LabelConfiguration,
    cache: Option<StateCache>,
    clinic: ClinicProfile,
    sheet: SheetConfig,
}

impl Session {
    pub fn new(config: LabelConfiguration) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Resume from `cache`, or start fresh when it holds nothing usable.
    pub fn restore(cache: StateCache) -> Self {
        let config = cache.load().unwrap_or_default();
        Self {
            config,
            cache: Some(cache),
            ..Self::default()
        }
    }

    pub fn with_clinic(mut self, clinic: ClinicProfile) -> Self {
        self.clinic = clinic;
        self
    }

    pub fn with_sheet(mut self, sheet: SheetConfig) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn config(&self) -> &LabelConfiguration {
        &self.config
    }

    pub fn clinic(&self) -> &ClinicProfile {
        &self.clinic
    }

    /// Apply one field update. Returns whether the configuration changed.
    pub fn apply(&mut self, update: FieldUpdate) -> bool {
        let changed = self.config.apply(update);
        if changed && let Some(cache) = &self.cache {
            cache.store(&self.config);
        }
        changed
    }

    /// Start over from a fresh default configuration and forget the cache.
    pub fn reset(&mut self) {
        self.config = LabelConfiguration::default();
        if let Some(cache) = &self.cache {
            cache.clear();
        }
        tracing::info!("session reset");
    }

    /// The labels currently shown.
    pub fn render(&self) -> Vec<RenderedLabel> {
        render_labels(&self.config)
    }

    pub fn preview_document(&self) -> HostDocument {
        preview_document(&self.render(), &self.clinic, &self.sheet)
    }

    /// Print the labels currently shown, one sheet each.
    pub fn print<F>(&self, facility: &mut F) -> Result<PrintOutcome, LabelError>
    where
        F: PrintFacility + ?Sized,
    {
        let mut document = self.preview_document();
        let fragments = printable_fragments(&document);
        print_labels(&mut document, &fragments, facility)
    }
}
