use ecomoving_schema::Product;
use std::path::Path;
use tracing::{error, warn};

/// Last-resort catalog compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Products from the bundled dataset. A broken bundle yields an empty list.
pub fn bundled_products() -> Vec<Product> {
    serde_json::from_str(BUNDLED_CATALOG).unwrap_or_else(|e| {
        error!(error = %e, "Bundled catalog is not valid JSON");
        Vec::new()
    })
}

/// Products from `path` when it is set and readable, else the bundled set.
/// Returns whether the on-disk file was used.
pub async fn static_products(path: Option<&Path>) -> (bool, Vec<Product>) {
    let Some(path) = path else {
        return (false, bundled_products());
    };

    let parsed = match tokio::fs::read_to_string(path).await {
        Ok(raw) => serde_json::from_str::<Vec<Product>>(&raw).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    match parsed {
        Ok(products) => (true, products),
        Err(reason) => {
            warn!(
                path = %path.display(),
                %reason,
                "Catalog fallback file unusable; using bundled catalog"
            );
            (false, bundled_products())
        }
    }
}
