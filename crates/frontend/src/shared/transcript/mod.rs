//! Transcript viewer.
//!
//! A click on a row's "view transcript" button reads the row's named fields,
//! copies them (with the score and sentiment badge classes) into the
//! transcript modal's target fields and opens the modal. A malformed row is
//! reported and skipped; the other rows keep working.

pub mod dom_row;
pub mod modal;

pub use dom_row::DomRow;
pub use modal::TranscriptModal;

use crate::layout::modal_service::{ModalRegistry, ModalService};
use crate::shared::notifications::{Notifier, ToastService};
use contracts::shared::error::UiError;
use contracts::shared::markup;
use contracts::shared::notification::Notification;
use contracts::shared::transcript::{RowSource, TranscriptField, TranscriptRecord};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Display fields of the transcript modal, keyed by target element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptTargets {
    pub fields: BTreeMap<&'static str, String>,
    pub score_class: String,
    pub sentiment_class: String,
}

impl TranscriptTargets {
    pub fn project(&mut self, record: &TranscriptRecord) {
        for field in TranscriptField::ALL {
            self.fields
                .insert(field.target_id(), record.field(field).to_string());
        }
        self.score_class = record.score_class.clone();
        self.sentiment_class = record.sentiment_class.clone();
    }

    pub fn text(&self, target_id: &str) -> &str {
        self.fields.get(target_id).map(String::as_str).unwrap_or("")
    }
}

/// Reads `row`, fills `targets` and opens the transcript modal.
///
/// On a malformed row nothing is written, the modal stays closed and the
/// error is logged and reported through `notifier`.
pub fn show_transcript<R: RowSource + ?Sized>(
    row: &R,
    targets: &mut TranscriptTargets,
    modals: &mut ModalRegistry,
    notifier: &dyn Notifier,
) -> Result<TranscriptRecord, UiError> {
    let record = match TranscriptRecord::read_from(row) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("transcript skipped: {e}");
            notifier.notify(Notification::warning(format!(
                "Transcript unavailable for {}",
                row.row_label()
            )));
            return Err(e);
        }
    };

    log::info!("viewing transcript for call {}", record.call_id);
    targets.project(&record);
    modals.open(markup::TRANSCRIPT_MODAL_ID)?;
    Ok(record)
}

#[derive(Clone, Copy)]
pub struct TranscriptViewer {
    targets: RwSignal<TranscriptTargets>,
    modals: ModalService,
    notifier: ToastService,
}

impl TranscriptViewer {
    pub fn new(modals: ModalService, notifier: ToastService) -> Self {
        Self {
            targets: RwSignal::new(TranscriptTargets::default()),
            modals,
            notifier,
        }
    }

    pub fn targets(&self) -> RwSignal<TranscriptTargets> {
        self.targets
    }

    pub fn view_row<R: RowSource + ?Sized>(&self, row: &R) {
        let notifier = self.notifier;
        // Targets are written before the modal opens; both only on success.
        let mut targets = self.targets.get_untracked();
        let result = self
            .modals
            .update_registry(|registry| show_transcript(row, &mut targets, registry, &notifier));
        if let Some(Ok(_)) = result {
            self.targets.set(targets);
        }
    }

    /// Handler for a click on a "view transcript" button inside a table row.
    pub fn view_from_event(&self, ev: &leptos::ev::MouseEvent) {
        ev.prevent_default();
        match DomRow::from_event(ev) {
            Ok(row) => self.view_row(&row),
            Err(e) => {
                log::warn!("transcript skipped: {e}");
                self.notifier
                    .notify(Notification::warning("Transcript unavailable for this row"));
            }
        }
    }
}

pub fn use_transcript_viewer() -> TranscriptViewer {
    use_context::<TranscriptViewer>().expect("TranscriptViewer not provided in context")
}
