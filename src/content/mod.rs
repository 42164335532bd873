//! Homepage content: fetched from the content table, merged into hero,
//! sections and extra rows, and held by an actor so refreshes and reads are
//! serialized.

pub mod actor;
pub mod defaults;
pub mod legacy;
pub mod loader;
pub mod watcher;

pub use actor::{ContentHandle, RefreshOutcome, spawn};
pub use defaults::{
    DEFAULT_CTA_LINK, DEFAULT_CTA_TEXT, campaign_hero, default_content, default_hero,
};
pub use loader::{ContentLoader, assemble};
pub use watcher::spawn_poller;
