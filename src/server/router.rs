use crate::catalog::CatalogHandle;
use crate::content::ContentHandle;
use crate::lead::LeadInbox;
use crate::render::{PageContext, render_message};
use crate::server::guards::auth::RequireAdminKey;
use crate::render::lead::LEAD_FORM_PATH;
use crate::server::routes::{content, hooks, leads, pages, products};

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use base64::Engine as _;
use rand::RngCore;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[derive(Clone)]
pub struct SiteState {
    pub content: ContentHandle,
    pub catalog: CatalogHandle,
    pub leads: LeadInbox,
    pub pages: Arc<PageContext>,
    pub admin_key: Arc<str>,
}

impl SiteState {
    pub fn new(
        content: ContentHandle,
        catalog: CatalogHandle,
        leads: LeadInbox,
        pages: PageContext,
        admin_key: Arc<str>,
    ) -> Self {
        Self {
            content,
            catalog,
            leads,
            pages: Arc::new(pages),
            admin_key,
        }
    }
}

async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render_message("404", "La página que buscas no existe.")),
    )
        .into_response()
}

/// One log line per request; the level follows the status class.
async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_string);

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    match status {
        500.. => error!(status, %request_id, %method, %path, latency_ms, "request failed"),
        400..=499 => warn!(status, %request_id, %method, %path, latency_ms, "request rejected"),
        _ => info!(status, %request_id, %method, %path, latency_ms, "request served"),
    }

    resp
}

pub fn site_router(state: SiteState) -> Router {
    let public = Router::new()
        .route("/", get(pages::home))
        .route("/catalogo", get(pages::catalog))
        .route(LEAD_FORM_PATH, post(pages::lead_form))
        .route("/catalogo/{id}", get(pages::product))
        .route("/api/content", get(content::get_content))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/leads", post(leads::create_lead));

    let admin = Router::new()
        .route(
            "/api/products/{id}",
            axum::routing::patch(products::update_product).delete(products::delete_product),
        )
        .route("/api/products/{id}/save", post(products::save_product))
        .route("/hooks/content", post(hooks::refresh_content))
        .route("/hooks/catalog", post(hooks::reload_catalog))
        .route_layer(middleware::from_extractor_with_state::<RequireAdminKey, _>(
            state.clone(),
        ));

    Router::new()
        .merge(public)
        .merge(admin)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(access_log))
}
