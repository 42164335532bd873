use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::assets::AssetResolver;
use crate::catalog::{self, CatalogActorArgs, CatalogEditor, CatalogHandle, CatalogLoader};
use crate::config::Config;
use crate::content::{self, ContentHandle, ContentLoader};
use crate::error::SiteError;
use crate::lead::LeadInbox;
use crate::render::PageContext;
use crate::server::router::SiteState;
use crate::supabase::SupabaseClient;

/// Everything the server runs on, started from one config.
pub struct Site {
    pub state: SiteState,
    pub content: ContentHandle,
    pub catalog: CatalogHandle,
    pub poller: Option<JoinHandle<()>>,
}

impl Site {
    /// Starts both actors, loads content and catalog once, and arms the
    /// content poller when configured.
    pub async fn start(cfg: &Config) -> Result<Self, SiteError> {
        let sb = &cfg.supabase;
        info!(
            url = %sb.url.as_ref().map_or("<unset>", |u| u.as_str()),
            proxy = %sb.proxy.as_ref().map_or("<none>", |u| u.as_str()),
            content_table = %sb.content_table,
            products_table = %sb.products_table,
            buffer_table = %sb.buffer_table,
            leads_table = %sb.leads_table.as_deref().unwrap_or("<none>"),
            timeout_secs = sb.timeout_secs,
            "Supabase config (effective)"
        );

        let client = SupabaseClient::from_config(sb)?;

        let content = content::spawn(ContentLoader::new(client.clone(), &sb.content_table)).await?;
        let outcome = content.refresh().await?;
        info!(?outcome, "Initial content load");

        let catalog = catalog::spawn(CatalogActorArgs {
            loader: CatalogLoader::new(
                client.clone(),
                &sb.products_table,
                &sb.buffer_table,
                cfg.catalog.fallback_path.clone(),
            ),
            editor: CatalogEditor::new(client.clone(), &sb.products_table, &sb.buffer_table),
        })
        .await?;

        let poller = content::spawn_poller(content.clone(), cfg.content.poll_interval_secs);

        let pages = PageContext {
            assets: AssetResolver::new(cfg.assets.bucket_url.clone()),
            hero_rotation_secs: cfg.site.hero_rotation_secs,
        };
        let state = SiteState::new(
            content.clone(),
            catalog.clone(),
            LeadInbox::new(client, sb.leads_table.clone()),
            pages,
            Arc::from(cfg.basic.admin_key.as_str()),
        );

        Ok(Self {
            state,
            content,
            catalog,
            poller,
        })
    }
}
