use serde::{Deserialize, Serialize};

use crate::de::lax_string;

/// Catalog download request captured from the lead form.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "lax_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lax_string")]
    pub company: String,
}
