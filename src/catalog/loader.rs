use ecomoving_schema::{BufferProductRow, LiveProductRow, Product};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use super::fallback::static_products;
use crate::supabase::{Order, SupabaseClient};

/// Where the current catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Live,
    Buffer,
    File,
    Bundled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub source: CatalogSource,
    pub products: Vec<Product>,
}

/// Runs the catalog fallback chain: curated table, approved staging rows,
/// then the static dataset.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: SupabaseClient,
    products_table: String,
    buffer_table: String,
    fallback_path: Option<PathBuf>,
}

impl CatalogLoader {
    pub fn new(
        client: SupabaseClient,
        products_table: impl Into<String>,
        buffer_table: impl Into<String>,
        fallback_path: Option<PathBuf>,
    ) -> Self {
        Self {
            client,
            products_table: products_table.into(),
            buffer_table: buffer_table.into(),
            fallback_path,
        }
    }

    /// Always yields a catalog; remote failures only move down the chain.
    pub async fn load(&self) -> CatalogLoad {
        if let Some(products) = self.fetch_live().await {
            return CatalogLoad {
                source: CatalogSource::Live,
                products,
            };
        }

        if let Some(products) = self.fetch_buffer().await {
            return CatalogLoad {
                source: CatalogSource::Buffer,
                products,
            };
        }

        let (from_file, products) = static_products(self.fallback_path.as_deref()).await;
        let source = if from_file {
            CatalogSource::File
        } else {
            CatalogSource::Bundled
        };
        info!(source = ?source, count = products.len(), "Serving static catalog");
        CatalogLoad { source, products }
    }

    async fn fetch_live(&self) -> Option<Vec<Product>> {
        let rows = self
            .client
            .table(&self.products_table)
            .select("*")
            .order("created_at", Order::Descending)
            .fetch_lenient::<LiveProductRow>()
            .await;
        non_empty_rows(&self.products_table, rows)
    }

    async fn fetch_buffer(&self) -> Option<Vec<Product>> {
        let rows = self
            .client
            .table(&self.buffer_table)
            .select("*")
            .eq("status", "approved")
            .order("found_at", Order::Descending)
            .fetch_lenient::<BufferProductRow>()
            .await;
        non_empty_rows(&self.buffer_table, rows)
    }
}

fn non_empty_rows<R: Into<Product>>(
    table: &str,
    rows: Result<Vec<R>, crate::error::SiteError>,
) -> Option<Vec<Product>> {
    match rows {
        Ok(rows) if rows.is_empty() => {
            warn!(table, "Catalog table returned no rows");
            None
        }
        Ok(rows) => {
            info!(table, count = rows.len(), "Catalog loaded");
            Some(rows.into_iter().map(Into::into).collect())
        }
        Err(e) => {
            warn!(table, error = %e, "Catalog table unavailable");
            None
        }
    }
}
