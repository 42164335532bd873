use ecomoving_schema::Product;
use serde::Deserialize;

use super::categories::aliases_for;

/// `?categoria=&q=` as sent by the catalog page and the products API.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CatalogQuery {
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl CatalogQuery {
    pub fn new(categoria: Option<&str>, q: Option<&str>) -> Self {
        Self {
            categoria: categoria.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    /// Trimmed search text; empty means "match everything".
    pub fn search(&self) -> &str {
        self.q.as_deref().map_or("", str::trim)
    }

    pub fn category_filter(&self) -> Option<CategoryFilter> {
        self.categoria.as_deref().and_then(CategoryFilter::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// `TODAS`, `TODOS` or `ALL`: every product, search ignored.
    Everything,
    /// Premium products matching the search on name or description.
    Premium,
    /// Products whose category contains one of these words.
    Aliases(Vec<String>),
}

impl CategoryFilter {
    /// `None` for a blank category.
    pub fn parse(raw: &str) -> Option<Self> {
        let category = raw.trim().to_uppercase();
        match category.as_str() {
            "" => None,
            "TODAS" | "TODOS" | "ALL" => Some(Self::Everything),
            "PREMIUM" => Some(Self::Premium),
            _ => Some(Self::Aliases(aliases_for(&category))),
        }
    }
}

/// Products visible for `query`, in catalog order. Never fails; a search that
/// matches nothing yields an empty list.
pub fn filter_products(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search().to_lowercase();

    let keep = |p: &Product| -> bool {
        match query.category_filter() {
            Some(CategoryFilter::Everything) => true,
            Some(CategoryFilter::Premium) => p.is_premium && matches_text(p, &needle),
            Some(CategoryFilter::Aliases(aliases)) => {
                let category = p.category.to_uppercase();
                aliases.iter().any(|a| category.contains(a.as_str()))
                    && matches_text_or_id(p, &needle)
            }
            None => matches_text_or_id(p, &needle),
        }
    };

    products.iter().filter(|p| keep(p)).cloned().collect()
}

fn matches_text(p: &Product, needle: &str) -> bool {
    needle.is_empty()
        || p.name.to_lowercase().contains(needle)
        || p.description.to_lowercase().contains(needle)
}

fn matches_text_or_id(p: &Product, needle: &str) -> bool {
    matches_text(p, needle) || (!p.id.is_empty() && p.id.to_lowercase().contains(needle))
}

/// Up to `limit` other products sharing `product`'s exact category, in
/// catalog order.
pub fn related_products(products: &[Product], product: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .cloned()
        .collect()
}
