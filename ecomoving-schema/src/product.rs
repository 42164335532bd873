use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{
    lax_bool, lax_opt_string, lax_record, lax_string, lax_string_list, non_empty,
    value_as_string_list,
};

/// Catalog entry as the views and the JSON API see it, whatever table it came from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lax_string_list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lax_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lax_string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lax_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub wholesaler: String,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_premium: bool,
}

pub const DEFAULT_CATEGORY: &str = "Otros";
pub const LIVE_WHOLESALER: &str = "Ecomoving";
pub const BUFFER_WHOLESALER: &str = "Premium";

impl Product {
    /// Images for the detail gallery: the full list, or the primary image alone.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            if self.image.is_empty() {
                Vec::new()
            } else {
                vec![self.image.as_str()]
            }
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Gallery order used when saving: `main` first, then every other image
    /// once, empties dropped.
    pub fn ordered_images(&self, main: &str) -> Vec<String> {
        std::iter::once(main)
            .chain(self.images.iter().map(String::as_str).filter(|img| *img != main))
            .filter(|img| !img.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Row of the curated `productos` table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct LiveProductRow {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub imagen_principal: Option<String>,
    #[serde(default)]
    pub imagenes_galeria: Value,
    #[serde(default)]
    pub features: Value,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub wholesaler: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_premium: bool,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub created_at: Option<String>,
}

impl From<LiveProductRow> for Product {
    fn from(row: LiveProductRow) -> Self {
        let image = row.imagen_principal.unwrap_or_default();
        let images = value_as_string_list(&row.imagenes_galeria).unwrap_or_else(|| {
            if image.is_empty() {
                Vec::new()
            } else {
                vec![image.clone()]
            }
        });

        Product {
            id: row.id,
            name: row.nombre.unwrap_or_default(),
            description: row.descripcion.unwrap_or_default(),
            features: value_as_string_list(&row.features).unwrap_or_default(),
            image,
            images,
            category: non_empty(row.categoria).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            wholesaler: non_empty(row.wholesaler).unwrap_or_else(|| LIVE_WHOLESALER.to_string()),
            is_premium: row.is_premium,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct TechnicalSpecs {
    #[serde(default)]
    pub specs: Value,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub is_premium: bool,
}

/// Row of the `agent_buffer` staging table (products awaiting or past review).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct BufferProductRow {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub original_description: Option<String>,
    #[serde(default)]
    pub features: Value,
    #[serde(default)]
    pub images: Value,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub category: Option<String>,
    /// Scraped rows sometimes carry this as a JSON string; only objects count.
    #[serde(default, deserialize_with = "lax_record")]
    pub technical_specs: Option<TechnicalSpecs>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub wholesaler: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lax_opt_string")]
    pub found_at: Option<String>,
}

impl From<BufferProductRow> for Product {
    fn from(row: BufferProductRow) -> Self {
        let specs = row.technical_specs.unwrap_or_default();
        let images = value_as_string_list(&row.images);

        // Scraped rows often repeat the name as their description.
        let description = row
            .original_description
            .filter(|d| *d != row.name)
            .unwrap_or_default();

        let image = images
            .as_ref()
            .and_then(|imgs| imgs.first().cloned())
            .and_then(|img| non_empty(Some(img)))
            .or(row.image)
            .unwrap_or_default();

        Product {
            id: row.id,
            name: row.name,
            description,
            features: value_as_string_list(&specs.specs)
                .or_else(|| value_as_string_list(&row.features))
                .unwrap_or_default(),
            image,
            images: images.unwrap_or_default(),
            category: non_empty(row.category)
                .or(specs.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            wholesaler: non_empty(row.wholesaler).unwrap_or_else(|| BUFFER_WHOLESALER.to_string()),
            is_premium: specs.is_premium,
        }
    }
}

/// Projection used by the existence check before a save.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductIdRow {
    #[serde(default, deserialize_with = "lax_string")]
    pub id: String,
}

/// PATCH body for `productos`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LiveProductUpdate {
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub imagen_principal: String,
    pub imagenes_galeria: Vec<String>,
    pub features: Vec<String>,
    pub wholesaler: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TechnicalSpecsUpdate {
    pub specs: Vec<String>,
    pub category: String,
}

/// PATCH body for `agent_buffer`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BufferProductUpdate {
    pub name: String,
    pub original_description: String,
    pub technical_specs: TechnicalSpecsUpdate,
    pub images: Vec<String>,
    pub wholesaler: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusUpdate {
    pub status: String,
}
