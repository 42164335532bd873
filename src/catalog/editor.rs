use ecomoving_schema::{
    BufferProductUpdate, LiveProductUpdate, Product, ProductIdRow, StatusUpdate,
    TechnicalSpecsUpdate,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::SiteError;
use crate::supabase::SupabaseClient;
use crate::utils::logging::debug_payload;

pub const REJECTED_STATUS: &str = "rejected";

/// Table a saved product was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    Live,
    Buffer,
}

/// Writes catalog edits back to the owning table.
#[derive(Debug, Clone)]
pub struct CatalogEditor {
    client: SupabaseClient,
    products_table: String,
    buffer_table: String,
}

impl CatalogEditor {
    pub fn new(
        client: SupabaseClient,
        products_table: impl Into<String>,
        buffer_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            products_table: products_table.into(),
            buffer_table: buffer_table.into(),
        }
    }

    /// Saves `product` to whichever table holds its id. `active_image`, when
    /// set, becomes the main image and leads the gallery.
    pub async fn save(
        &self,
        product: &Product,
        active_image: Option<&str>,
    ) -> Result<ProductSource, SiteError> {
        let main_image = active_image
            .filter(|img| !img.is_empty())
            .unwrap_or(product.image.as_str())
            .to_string();
        let ordered_images = product.ordered_images(&main_image);

        let existing: Option<ProductIdRow> = self
            .client
            .table(&self.products_table)
            .select("id")
            .eq("id", &product.id)
            .maybe_single()
            .await?;

        if existing.is_some() {
            let body = LiveProductUpdate {
                nombre: product.name.clone(),
                descripcion: product.description.clone(),
                categoria: product.category.clone(),
                imagen_principal: main_image,
                imagenes_galeria: ordered_images,
                features: product.features.clone(),
                wholesaler: product.wholesaler.clone(),
            };
            debug_payload("Live product update", &product.id, &body);
            self.client
                .table(&self.products_table)
                .eq("id", &product.id)
                .update(&body)
                .await?;
            info!(id = %product.id, table = %self.products_table, "Product saved");
            Ok(ProductSource::Live)
        } else {
            let body = BufferProductUpdate {
                name: product.name.clone(),
                original_description: product.description.clone(),
                technical_specs: TechnicalSpecsUpdate {
                    specs: product.features.clone(),
                    category: product.category.clone(),
                },
                images: ordered_images,
                wholesaler: product.wholesaler.clone(),
            };
            debug_payload("Staged product update", &product.id, &body);
            self.client
                .table(&self.buffer_table)
                .eq("id", &product.id)
                .update(&body)
                .await?;
            info!(id = %product.id, table = %self.buffer_table, "Product saved");
            Ok(ProductSource::Buffer)
        }
    }

    /// Marks a staged product rejected so it leaves the approved catalog.
    pub async fn reject(&self, id: &str) -> Result<(), SiteError> {
        if !is_remote_id(id) {
            return Err(SiteError::BadRequest(
                "Este producto es parte del catálogo base estático y no puede eliminarse de la base de datos."
                    .to_string(),
            ));
        }

        self.client
            .table(&self.buffer_table)
            .eq("id", id)
            .update(&StatusUpdate {
                status: REJECTED_STATUS.to_string(),
            })
            .await?;
        info!(id, table = %self.buffer_table, "Product rejected");
        Ok(())
    }
}

/// Remote rows use hyphenated UUID ids; static entries never do.
pub fn is_remote_id(id: &str) -> bool {
    id.len() == 36 && Uuid::try_parse(id).is_ok()
}
