use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};
use url::Url;

use super::query::TableQuery;
use crate::config::SupabaseConfig;
use crate::error::SiteError;
use crate::utils::jwt::decode_key_claims;

pub const SUPABASE_USER_AGENT: &str = concat!("ecomoving/", env!("CARGO_PKG_VERSION"));

const APIKEY: HeaderName = HeaderName::from_static("apikey");

/// Builds the reqwest client shared by every table query.
pub fn build_http_client(cfg: &SupabaseConfig) -> Result<reqwest::Client, SiteError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(SUPABASE_USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(cfg.timeout_secs.max(1)));

    if let Some(proxy_url) = cfg.proxy.as_ref() {
        let proxy = reqwest::Proxy::all(proxy_url.as_str())?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

/// Cheap to clone; all clones share the connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: Arc<Url>,
    headers: Arc<HeaderMap>,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_url", &self.rest_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    pub fn new(cfg: &SupabaseConfig, http: reqwest::Client) -> Result<Self, SiteError> {
        let project_url = cfg
            .url
            .as_ref()
            .ok_or_else(|| SiteError::Config("supabase.url is not set".to_string()))?;
        let rest_url = rest_base(project_url)?;

        let key = cfg.anon_key.trim();
        let mut headers = HeaderMap::new();
        let invalid_key =
            |_| SiteError::Config("supabase.anon_key is not a valid header value".to_string());
        headers.insert(APIKEY, HeaderValue::from_str(key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid_key)?,
        );

        inspect_key(key, project_url);

        Ok(Self {
            http,
            rest_url: Arc::new(rest_url),
            headers: Arc::new(headers),
        })
    }

    /// Builds the HTTP client from the same config and wraps it.
    pub fn from_config(cfg: &SupabaseConfig) -> Result<Self, SiteError> {
        let http = build_http_client(cfg)?;
        Self::new(cfg, http)
    }

    /// Starts a query against `table`.
    pub fn table(&self, table: &str) -> TableQuery {
        TableQuery::new(self.clone(), table)
    }

    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    pub(super) fn table_url(&self, table: &str) -> Result<Url, SiteError> {
        Ok(self.rest_url.join(table)?)
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(super) fn headers(&self) -> HeaderMap {
        self.headers.as_ref().clone()
    }
}

/// `https://<ref>.supabase.co[/prefix]` -> `https://<ref>.supabase.co[/prefix]/rest/v1/`.
fn rest_base(project_url: &Url) -> Result<Url, SiteError> {
    let mut base = project_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("rest/v1/")?)
}

/// Logs which role the key carries. A service-role key bypasses row-level
/// security and must never ship with a public site.
fn inspect_key(key: &str, project_url: &Url) {
    let Some(claims) = decode_key_claims(key) else {
        warn!("supabase.anon_key is not a JWT; requests will likely be rejected");
        return;
    };

    let role = claims.role.as_deref().unwrap_or("-");
    let project_ref = claims.project_ref.as_deref().unwrap_or("-");

    if role == "service_role" {
        warn!(role, "supabase key is a service-role key; use the anon key for the site");
    }
    let host_matches = project_url
        .host_str()
        .is_some_and(|host| host.starts_with(&format!("{project_ref}.")));
    if project_ref != "-" && !host_matches {
        warn!(
            project_ref,
            url = %project_url,
            "supabase key belongs to a different project than supabase.url"
        );
    }
    info!(role, project_ref, "Supabase client configured");
}
