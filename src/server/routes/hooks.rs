//! Refresh triggers, meant for Supabase database webhooks.

use axum::{Json, extract::State};
use tracing::info;

use crate::catalog::ReloadReport;
use crate::content::RefreshOutcome;
use crate::error::SiteError;
use crate::server::router::SiteState;

pub async fn refresh_content(
    State(state): State<SiteState>,
) -> Result<Json<RefreshOutcome>, SiteError> {
    info!("Content refresh requested by webhook");
    Ok(Json(state.content.refresh().await?))
}

pub async fn reload_catalog(
    State(state): State<SiteState>,
) -> Result<Json<ReloadReport>, SiteError> {
    info!("Catalog reload requested by webhook");
    Ok(Json(state.catalog.reload().await?))
}
