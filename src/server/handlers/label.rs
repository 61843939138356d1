//! Label editing, preview and printing handlers.

use axum::{
    Json,
    extract::State,
    response::{Html, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::super::state::AppState;
use super::{error_response, success_response};
use crate::config::{FieldUpdate, LabelConfiguration, MixtureAmount};
use crate::label::RenderedLabel;
use crate::printer::PrintOutcome;

/// Response to a field update.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Whether the update changed anything
    pub changed: bool,
    pub config: LabelConfiguration,
}

/// One entry of the mixture-amount picker.
#[derive(Debug, Serialize)]
pub struct MixtureChoice {
    pub amount: MixtureAmount,
    /// As printed, e.g. "২ চামচ ঔষধ"
    pub phrase: String,
}

/// Handle GET / - the preview page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.session.read().await.preview_document().to_html())
}

/// Handle GET /api/label - the current configuration.
pub async fn get(State(state): State<Arc<AppState>>) -> Json<LabelConfiguration> {
    Json(state.session.read().await.config().clone())
}

/// Handle POST /api/label/field - apply one field update.
pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Json(update): Json<FieldUpdate>,
) -> Json<UpdateResponse> {
    let mut session = state.session.write().await;
    let changed = session.apply(update);
    Json(UpdateResponse {
        changed,
        config: session.config().clone(),
    })
}

/// Handle GET /api/label/mixture-choices - the amounts the form offers.
pub async fn mixture_choices() -> Json<Vec<MixtureChoice>> {
    let choices = MixtureAmount::CHOICES
        .iter()
        .map(|amount| MixtureChoice {
            amount: amount.clone(),
            phrase: amount.phrase(),
        })
        .collect();
    Json(choices)
}

/// Handle POST /api/label/reset - back to defaults, cache cleared.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<LabelConfiguration> {
    let mut session = state.session.write().await;
    session.reset();
    Json(session.config().clone())
}

/// Handle GET /api/label/preview - the labels currently shown.
pub async fn preview(State(state): State<Arc<AppState>>) -> Json<Vec<RenderedLabel>> {
    Json(state.session.read().await.render())
}

/// Handle POST /api/label/print - print the labels currently shown.
pub async fn print(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await.clone();
    let target = state.config.print_target.clone();

    // Print facilities block (file writes, external programs)
    let print_result = tokio::task::spawn_blocking(move || {
        let mut facility = target.facility();
        session.print(&mut facility)
    })
    .await;

    match print_result {
        Ok(Ok(PrintOutcome::Printed { sheets })) => {
            success_response(&format!("{} sheet(s) sent to {}", sheets, state.config.print_target))
        }
        Ok(Ok(PrintOutcome::Cancelled)) => success_response("Print cancelled"),
        Ok(Ok(PrintOutcome::Skipped)) => success_response("Nothing to print"),
        Ok(Err(e)) => error_response(&format!("Print failed: {}", e)),
        Err(e) => error_response(&format!("Task error: {}", e)),
    }
}
