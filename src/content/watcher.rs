use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use super::actor::ContentHandle;

/// Periodically asks the content actor to refresh. Returns `None` when
/// polling is disabled (`interval_secs == 0`).
pub fn spawn_poller(handle: ContentHandle, interval_secs: u64) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        info!("Content polling disabled; relying on the content webhook");
        return None;
    }

    info!(interval_secs, "Content polling enabled");
    Some(tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick fires immediately; startup already refreshed.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            debug!("Content poll tick");
            handle.request_refresh();
        }
    }))
}
