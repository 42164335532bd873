use axum::{Json, extract::State, http::StatusCode};
use ecomoving_schema::LeadSubmission;
use serde_json::{Value, json};

use crate::error::SiteError;
use crate::server::router::SiteState;

pub async fn create_lead(
    State(state): State<SiteState>,
    Json(form): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<Value>), SiteError> {
    let lead = state.leads.submit(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "email": lead.email })),
    ))
}
