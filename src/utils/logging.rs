use serde::Serialize;
use tracing::{Level, debug};

/// Logs `payload` pretty-printed under `label`. Skips serialization unless
/// DEBUG is enabled.
pub(crate) fn debug_payload<T: Serialize>(label: &str, id: &str, payload: &T) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    match serde_json::to_string_pretty(payload) {
        Ok(json) => debug!(id, "{label}:\n{json}"),
        Err(e) => debug!(id, error = %e, "{label}: payload is not serializable"),
    }
}
