mod postgrest;
mod site;

pub use postgrest::PostgrestErrorBody;
pub use site::{ApiErrorBody, ApiErrorObject, SiteError};
