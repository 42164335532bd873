use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Homepage content refresh settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ContentConfig {
    /// Refetch the content table every N seconds; `0` relies on the webhook only.
    /// TOML: `content.poll_interval_secs`. Default: `0`.
    #[serde(default)]
    pub poll_interval_secs: u64,
}

/// Catalog fallback settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// On-disk replacement for the bundled fallback catalog.
    /// TOML: `catalog.fallback_path`. Default: unset (bundled data).
    #[serde(default)]
    pub fallback_path: Option<PathBuf>,
}

/// Where image references without a scheme live.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AssetsConfig {
    /// Public object-storage base, e.g.
    /// `https://<ref>.supabase.co/storage/v1/object/public/web/`.
    /// TOML: `assets.bucket_url`. Default: unset (references used as-is).
    #[serde(default)]
    pub bucket_url: Option<Url>,
}

/// Presentation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Seconds each hero background stays up before rotating.
    /// TOML: `site.hero_rotation_secs`. Default: `6`.
    #[serde(default = "default_hero_rotation_secs")]
    pub hero_rotation_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_rotation_secs: default_hero_rotation_secs(),
        }
    }
}

fn default_hero_rotation_secs() -> u64 {
    6
}
