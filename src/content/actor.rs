use ecomoving_schema::WebContent;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::defaults::default_content;
use super::loader::{ContentLoader, assemble};
use crate::error::SiteError;

#[derive(Debug)]
pub enum ContentActorMessage {
    /// Current page content.
    Snapshot(RpcReplyPort<Arc<WebContent>>),

    /// Re-read the content table. The reply is optional so webhooks and the
    /// poller can fire and forget.
    Refresh(Option<RpcReplyPort<RefreshOutcome>>),
}

/// What a refresh did to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    Updated { rows: usize },
    /// The table answered with no rows; the snapshot was kept.
    Empty,
    /// The fetch failed; the snapshot was kept.
    Failed { reason: String },
}

#[derive(Clone)]
pub struct ContentHandle {
    actor: ActorRef<ContentActorMessage>,
}

impl ContentHandle {
    pub async fn snapshot(&self) -> Result<Arc<WebContent>, SiteError> {
        ractor::call!(self.actor, ContentActorMessage::Snapshot)
            .map_err(|e| SiteError::Actor(format!("ContentActor Snapshot RPC failed: {e}")))
    }

    /// Refresh and wait for the result.
    pub async fn refresh(&self) -> Result<RefreshOutcome, SiteError> {
        ractor::call!(self.actor, |reply| ContentActorMessage::Refresh(Some(reply)))
            .map_err(|e| SiteError::Actor(format!("ContentActor Refresh RPC failed: {e}")))
    }

    /// Queue a refresh without waiting.
    pub fn request_refresh(&self) {
        if let Err(e) = ractor::cast!(self.actor, ContentActorMessage::Refresh(None)) {
            warn!("ContentActor refresh cast failed: {e}");
        }
    }
}

struct ContentActorState {
    loader: ContentLoader,
    snapshot: Arc<WebContent>,
}

struct ContentActor;

#[ractor::async_trait]
impl Actor for ContentActor {
    type Msg = ContentActorMessage;
    type State = ContentActorState;
    type Arguments = ContentLoader;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        loader: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!("ContentActor initialized with default content");
        Ok(ContentActorState {
            loader,
            snapshot: Arc::new(default_content()),
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            ContentActorMessage::Snapshot(reply) => {
                let _ = reply.send(state.snapshot.clone());
            }
            ContentActorMessage::Refresh(reply) => {
                let outcome = Self::refresh(state).await;
                if let Some(reply) = reply {
                    let _ = reply.send(outcome);
                }
            }
        }
        Ok(())
    }
}

impl ContentActor {
    async fn refresh(state: &mut ContentActorState) -> RefreshOutcome {
        match state.loader.fetch_rows().await {
            Ok(rows) if rows.is_empty() => {
                warn!("Content table returned no rows; keeping current content");
                RefreshOutcome::Empty
            }
            Ok(rows) => {
                let count = rows.len();
                state.snapshot = Arc::new(assemble(rows));
                info!(
                    rows = count,
                    sections = state.snapshot.sections.len(),
                    extras = state.snapshot.extras.len(),
                    "Content refreshed"
                );
                RefreshOutcome::Updated { rows: count }
            }
            Err(e) => {
                warn!(error = %e, "Content refresh failed; keeping current content");
                RefreshOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Starts the actor holding the default content. Call
/// [`ContentHandle::refresh`] to load the table.
pub async fn spawn(loader: ContentLoader) -> Result<ContentHandle, SiteError> {
    let (actor, _jh) = Actor::spawn(None, ContentActor, loader)
        .await
        .map_err(|e| SiteError::Actor(format!("failed to spawn ContentActor: {e}")))?;
    Ok(ContentHandle { actor })
}
