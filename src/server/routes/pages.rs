use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use ecomoving_schema::LeadSubmission;
use serde::Deserialize;

use crate::catalog::CatalogQuery;
use crate::error::SiteError;
use crate::render::catalog::RELATED_LIMIT;
use crate::render::{render_catalog, render_home, render_message, render_product};
use crate::server::router::SiteState;

pub const LEAD_OK_REDIRECT: &str = "/catalogo?lead=ok";

#[derive(Debug, Default, Deserialize)]
pub struct CatalogPageParams {
    #[serde(default)]
    categoria: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    lead: Option<String>,
}

pub async fn home(State(state): State<SiteState>) -> Result<Html<String>, SiteError> {
    let content = state.content.snapshot().await?;
    Ok(Html(render_home(&content, &state.pages)))
}

pub async fn catalog(
    State(state): State<SiteState>,
    Query(params): Query<CatalogPageParams>,
) -> Result<Html<String>, SiteError> {
    let query = CatalogQuery {
        categoria: params.categoria,
        q: params.q,
    };
    let products = state.catalog.list(query.clone()).await?;
    let lead_submitted = params.lead.as_deref() == Some("ok");
    Ok(Html(render_catalog(
        products,
        &query,
        lead_submitted,
        &state.pages,
    )))
}

pub async fn product(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Result<Response, SiteError> {
    match state.catalog.get(&id).await {
        Ok(product) => {
            let related = state.catalog.related(&id, RELATED_LIMIT).await?;
            Ok(Html(render_product(product, related, &state.pages)).into_response())
        }
        Err(SiteError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            Html(render_message("404", "Este producto ya no está en el catálogo.")),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn lead_form(
    State(state): State<SiteState>,
    Form(form): Form<LeadSubmission>,
) -> Result<Response, SiteError> {
    match state.leads.submit(form).await {
        Ok(_) => Ok(Redirect::to(LEAD_OK_REDIRECT).into_response()),
        Err(SiteError::BadRequest(reason)) => Ok((
            StatusCode::BAD_REQUEST,
            Html(render_message("Revisa tus datos", &reason)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
