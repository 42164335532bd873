use serde::{Deserialize, Serialize};
use url::Url;

/// Connection to the hosted backend (PostgREST under `<url>/rest/v1`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://<ref>.supabase.co`.
    /// TOML: `supabase.url`. Required by the server and the maintenance tool.
    #[serde(default)]
    pub url: Option<Url>,

    /// Public (anon) API key, sent as `apikey` and bearer token.
    /// TOML: `supabase.anon_key`. Prefer `ECOMOVING_SUPABASE__ANON_KEY`.
    #[serde(default)]
    pub anon_key: String,

    /// Optional upstream HTTP proxy for the reqwest client.
    /// TOML: `supabase.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Table holding named content rows.
    /// TOML: `supabase.content_table`. Default: `web_contenido`.
    #[serde(default = "default_content_table")]
    pub content_table: String,

    /// Curated product table, tried first.
    /// TOML: `supabase.products_table`. Default: `productos`.
    #[serde(default = "default_products_table")]
    pub products_table: String,

    /// Staging table with reviewed products, used when the curated table fails or is empty.
    /// TOML: `supabase.buffer_table`. Default: `agent_buffer`.
    #[serde(default = "default_buffer_table")]
    pub buffer_table: String,

    /// Table receiving captured leads. Unset: leads are only logged.
    /// TOML: `supabase.leads_table`.
    #[serde(default)]
    pub leads_table: Option<String>,

    /// Per-request timeout in seconds.
    /// TOML: `supabase.timeout_secs`. Default: `15`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: String::new(),
            proxy: None,
            content_table: default_content_table(),
            products_table: default_products_table(),
            buffer_table: default_buffer_table(),
            leads_table: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_content_table() -> String {
    "web_contenido".to_string()
}

fn default_products_table() -> String {
    "productos".to_string()
}

fn default_buffer_table() -> String {
    "agent_buffer".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}
