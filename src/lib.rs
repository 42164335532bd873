pub mod assets;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod lead;
pub mod render;
pub mod server;
pub mod supabase;
pub mod telemetry;
mod utils;

pub use bootstrap::Site;
pub use error::SiteError;
