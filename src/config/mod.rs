mod basic;
mod site;
mod supabase;

pub use basic::BasicConfig;
pub use site::{AssetsConfig, CatalogConfig, ContentConfig, SiteConfig};
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SiteError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Hosted backend connection (see `supabase` table in config.toml).
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Homepage content refresh (see `content` table in config.toml).
    #[serde(default)]
    pub content: ContentConfig,

    /// Catalog fallback data (see `catalog` table in config.toml).
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Image asset locations (see `assets` table in config.toml).
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Presentation knobs (see `site` table in config.toml).
    #[serde(default)]
    pub site: SiteConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ECOMOVING_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `ECOMOVING_`-prefixed environment variables (`__` separates tables, e.g.
    /// `ECOMOVING_SUPABASE__ANON_KEY`).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from every source without checking required fields.
    pub fn load() -> Result<Self, SiteError> {
        Self::figment()
            .extract()
            .map_err(|err| SiteError::Config(err.to_string()))
    }

    /// Loads configuration and checks what the server cannot run without.
    pub fn load_validated() -> Result<Self, SiteError> {
        let cfg = Self::load()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.supabase.url.is_none() {
            return Err(SiteError::Config(
                "supabase.url must be set (ECOMOVING_SUPABASE__URL)".to_string(),
            ));
        }
        if self.supabase.anon_key.trim().is_empty() {
            return Err(SiteError::Config(
                "supabase.anon_key must be set and non-empty (ECOMOVING_SUPABASE__ANON_KEY)"
                    .to_string(),
            ));
        }
        if self.basic.admin_key.trim().is_empty() {
            return Err(SiteError::Config(
                "basic.admin_key must be set and non-empty".to_string(),
            ));
        }
        Ok(())
    }
}
