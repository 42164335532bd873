use base64::Engine as _;
use serde::Deserialize;

/// The claims of a Supabase API key that matter for startup checks.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct KeyClaims {
    #[serde(default)]
    pub role: Option<String>,
    /// Project ref the key was issued for.
    #[serde(default, rename = "ref")]
    pub project_ref: Option<String>,
}

/// Reads the payload segment of a JWT-shaped key. The signature is not checked.
pub(crate) fn decode_key_claims(key: &str) -> Option<KeyClaims> {
    let mut segments = key.split('.');
    let payload = segments.nth(1)?;
    segments.next()?;

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
