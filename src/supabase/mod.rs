//! Thin PostgREST client for the hosted backend.
//!
//! Only what the site needs: filtered reads, PATCH updates, upserts, inserts
//! and deletes against `<project>/rest/v1/<table>`. Nothing is retried; callers
//! decide how to fall back.

mod client;
mod query;

pub use client::{SUPABASE_USER_AGENT, SupabaseClient, build_http_client};
pub use query::{Order, TableQuery};
