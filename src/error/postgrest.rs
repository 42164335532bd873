use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Error payload returned by PostgREST (`{"code","message","details","hint"}`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostgrestErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Usually a string, sometimes null or structured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(flatten)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl PostgrestErrorBody {
    /// Parses an upstream body, keeping a preview of unstructured text as the message.
    pub fn from_body(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_else(|_| {
            let text = String::from_utf8_lossy(raw);
            Self {
                message: (!text.trim().is_empty())
                    .then(|| format!("{:.len$}", text, len = UPSTREAM_BODY_PREVIEW_CHARS)),
                ..Default::default()
            }
        })
    }

    pub fn describe(&self) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{message} ({code})"),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

pub(crate) const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;
