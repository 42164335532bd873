//! Product catalog: loaded through a table fallback chain, filtered in
//! memory, and edited back to whichever table owns each product.

pub mod actor;
pub mod categories;
pub mod editor;
pub mod fallback;
pub mod filter;
pub mod loader;

pub use actor::{CatalogActorArgs, CatalogHandle, ReloadReport, spawn};
pub use categories::{DISPLAY_CATEGORIES, aliases_for};
pub use editor::{CatalogEditor, ProductSource, is_remote_id};
pub use filter::{CatalogQuery, CategoryFilter, filter_products, related_products};
pub use loader::{CatalogLoad, CatalogLoader, CatalogSource};
