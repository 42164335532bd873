use ecomoving_schema::Product;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use serde::Serialize;
use tracing::{info, warn};

use super::editor::{CatalogEditor, ProductSource};
use super::filter::{CatalogQuery, filter_products, related_products};
use super::loader::{CatalogLoader, CatalogSource};
use crate::error::SiteError;

#[derive(Debug)]
pub enum CatalogActorMessage {
    /// Products matching a query.
    List(CatalogQuery, RpcReplyPort<Vec<Product>>),

    /// One product by id.
    Get(String, RpcReplyPort<Option<Product>>),

    /// Other products in the same category as `id`; empty for an unknown id.
    Related {
        id: String,
        limit: usize,
        reply: RpcReplyPort<Vec<Product>>,
    },

    /// Replace the in-memory product with the same id.
    Update(Product, RpcReplyPort<Result<Product, SiteError>>),

    /// Persist the in-memory product to its owning table.
    Save {
        id: String,
        active_image: Option<String>,
        reply: RpcReplyPort<Result<ProductSource, SiteError>>,
    },

    /// Reject a remote product and drop it from the list.
    Remove(String, RpcReplyPort<Result<(), SiteError>>),

    /// Rerun the fallback chain.
    Reload(Option<RpcReplyPort<ReloadReport>>),
}

/// Summary of a catalog reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReloadReport {
    pub source: CatalogSource,
    pub count: usize,
}

#[derive(Clone)]
pub struct CatalogHandle {
    actor: ActorRef<CatalogActorMessage>,
}

impl CatalogHandle {
    pub async fn list(&self, query: CatalogQuery) -> Result<Vec<Product>, SiteError> {
        ractor::call!(self.actor, CatalogActorMessage::List, query)
            .map_err(|e| SiteError::Actor(format!("CatalogActor List RPC failed: {e}")))
    }

    pub async fn get(&self, id: &str) -> Result<Product, SiteError> {
        ractor::call!(self.actor, CatalogActorMessage::Get, id.to_string())
            .map_err(|e| SiteError::Actor(format!("CatalogActor Get RPC failed: {e}")))?
            .ok_or_else(|| SiteError::NotFound(format!("product {id} not found")))
    }

    pub async fn related(&self, id: &str, limit: usize) -> Result<Vec<Product>, SiteError> {
        ractor::call!(self.actor, |reply| CatalogActorMessage::Related {
            id: id.to_string(),
            limit,
            reply,
        })
        .map_err(|e| SiteError::Actor(format!("CatalogActor Related RPC failed: {e}")))
    }

    pub async fn update(&self, product: Product) -> Result<Product, SiteError> {
        ractor::call!(self.actor, CatalogActorMessage::Update, product)
            .map_err(|e| SiteError::Actor(format!("CatalogActor Update RPC failed: {e}")))?
    }

    pub async fn save(
        &self,
        id: &str,
        active_image: Option<String>,
    ) -> Result<ProductSource, SiteError> {
        ractor::call!(self.actor, |reply| CatalogActorMessage::Save {
            id: id.to_string(),
            active_image,
            reply,
        })
        .map_err(|e| SiteError::Actor(format!("CatalogActor Save RPC failed: {e}")))?
    }

    pub async fn remove(&self, id: &str) -> Result<(), SiteError> {
        ractor::call!(self.actor, CatalogActorMessage::Remove, id.to_string())
            .map_err(|e| SiteError::Actor(format!("CatalogActor Remove RPC failed: {e}")))?
    }

    /// Reload and wait for the result.
    pub async fn reload(&self) -> Result<ReloadReport, SiteError> {
        ractor::call!(self.actor, |reply| CatalogActorMessage::Reload(Some(reply)))
            .map_err(|e| SiteError::Actor(format!("CatalogActor Reload RPC failed: {e}")))
    }

    /// Queue a reload without waiting.
    pub fn request_reload(&self) {
        if let Err(e) = ractor::cast!(self.actor, CatalogActorMessage::Reload(None)) {
            warn!("CatalogActor reload cast failed: {e}");
        }
    }
}

pub struct CatalogActorArgs {
    pub loader: CatalogLoader,
    pub editor: CatalogEditor,
}

struct CatalogActorState {
    loader: CatalogLoader,
    editor: CatalogEditor,
    products: Vec<Product>,
}

struct CatalogActor;

#[ractor::async_trait]
impl Actor for CatalogActor {
    type Msg = CatalogActorMessage;
    type State = CatalogActorState;
    type Arguments = CatalogActorArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let load = args.loader.load().await;
        info!(source = ?load.source, count = load.products.len(), "CatalogActor initialized");
        Ok(CatalogActorState {
            loader: args.loader,
            editor: args.editor,
            products: load.products,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            CatalogActorMessage::List(query, reply) => {
                let _ = reply.send(filter_products(&state.products, &query));
            }
            CatalogActorMessage::Get(id, reply) => {
                let found = state.products.iter().find(|p| p.id == id).cloned();
                let _ = reply.send(found);
            }
            CatalogActorMessage::Related { id, limit, reply } => {
                let related = state
                    .products
                    .iter()
                    .find(|p| p.id == id)
                    .map(|product| related_products(&state.products, product, limit))
                    .unwrap_or_default();
                let _ = reply.send(related);
            }
            CatalogActorMessage::Update(product, reply) => {
                let res = match state.products.iter_mut().find(|p| p.id == product.id) {
                    Some(slot) => {
                        *slot = product.clone();
                        Ok(product)
                    }
                    None => Err(SiteError::NotFound(format!("product {} not found", product.id))),
                };
                let _ = reply.send(res);
            }
            CatalogActorMessage::Save {
                id,
                active_image,
                reply,
            } => {
                let res = match state.products.iter().find(|p| p.id == id) {
                    Some(product) => state.editor.save(product, active_image.as_deref()).await,
                    None => Err(SiteError::NotFound(format!("product {id} not found"))),
                };
                let _ = reply.send(res);
            }
            CatalogActorMessage::Remove(id, reply) => {
                let res = state.editor.reject(&id).await;
                if res.is_ok() {
                    state.products.retain(|p| p.id != id);
                }
                let _ = reply.send(res);
            }
            CatalogActorMessage::Reload(reply) => {
                let load = state.loader.load().await;
                let report = ReloadReport {
                    source: load.source,
                    count: load.products.len(),
                };
                state.products = load.products;
                info!(source = ?report.source, count = report.count, "Catalog reloaded");
                if let Some(reply) = reply {
                    let _ = reply.send(report);
                }
            }
        }
        Ok(())
    }
}

/// Starts the catalog actor. The first load runs before this returns.
pub async fn spawn(args: CatalogActorArgs) -> Result<CatalogHandle, SiteError> {
    let (actor, _jh) = Actor::spawn(None, CatalogActor, args)
        .await
        .map_err(|e| SiteError::Actor(format!("failed to spawn CatalogActor: {e}")))?;
    Ok(CatalogHandle { actor })
}
