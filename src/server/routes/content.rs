use axum::{Json, extract::State};
use ecomoving_schema::WebContent;

use crate::error::SiteError;
use crate::server::router::SiteState;

pub async fn get_content(State(state): State<SiteState>) -> Result<Json<WebContent>, SiteError> {
    let snapshot = state.content.snapshot().await?;
    Ok(Json(WebContent::clone(&snapshot)))
}
