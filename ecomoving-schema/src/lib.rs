//! Record shapes shared by the site service and its maintenance tooling.
//!
//! Every record here is read from tables edited by hand or by other tools, so
//! deserialization is lax: unknown fields are ignored, `null` and missing
//! values fall back to defaults, and ids may arrive as strings or numbers.

pub mod content;
pub mod de;
pub mod lead;
pub mod product;

pub use content::{
    ContentRow, DynamicSection, ExtraRow, HeroContent, LayoutBlock, TextAlign, WebContent,
};
pub use lead::LeadSubmission;
pub use product::{
    BufferProductRow, BufferProductUpdate, LiveProductRow, LiveProductUpdate, Product,
    ProductIdRow, StatusUpdate, TechnicalSpecs, TechnicalSpecsUpdate,
};
