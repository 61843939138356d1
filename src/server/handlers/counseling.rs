//! Counseling catalog handler.

use axum::Json;

use crate::compose::PREDEFINED_COUNSELING;

/// Handle GET /api/counseling/predefined - the entries the form offers.
pub async fn predefined() -> Json<&'static [&'static str]> {
    Json(&PREDEFINED_COUNSELING)
}
