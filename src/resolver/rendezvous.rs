//! Two-party rendezvous for the lens and hierarchy fetches.
//!
//! Both legs run concurrently. Lens-ready is delivered the moment the lens
//! leg settles; hierarchy-ready is delivered immediately if the lens leg has
//! already settled, otherwise parked and flushed right after lens-ready.
//! Each event fires exactly once per invocation. Neither leg cancels the
//! other: a failed leg delivers nothing for itself, still unblocks the
//! gate, and its error is surfaced once both legs are done.

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use serde_json::Value;
use std::future::Future;
use tracing::warn;

use crate::error::TransportError;
use crate::perspective::ResolvedPerspective;
use crate::transport::{ViewBridge, ViewEvent};

enum Leg {
    Lens(Result<Value, TransportError>),
    Hierarchy(Result<Value, TransportError>),
}

/// Explicit join slots, transitioned once per leg completion.
enum JoinState {
    Empty,
    LensDone,
    HierarchyDone { pending: Option<ViewEvent> },
    Both,
}

pub(crate) async fn join_lens_and_hierarchy<L, H>(
    lens_fut: L,
    hierarchy_fut: H,
    bridge: &dyn ViewBridge,
    state: &mut ResolvedPerspective,
) -> Result<(), TransportError>
where
    L: Future<Output = Result<Value, TransportError>> + Send,
    H: Future<Output = Result<Value, TransportError>> + Send,
{
    let mut legs = FuturesUnordered::new();
    legs.push(async move { Leg::Lens(lens_fut.await) }.boxed());
    legs.push(async move { Leg::Hierarchy(hierarchy_fut.await) }.boxed());

    let mut join = JoinState::Empty;
    let mut first_error: Option<TransportError> = None;

    while let Some(leg) = legs.next().await {
        match leg {
            Leg::Lens(result) => {
                match result {
                    Ok(body) => {
                        let library = body.get("library").cloned().unwrap_or(Value::Null);
                        bridge.deliver(ViewEvent::LensReady { library });
                        state.lens = body;
                    }
                    Err(err) => {
                        warn!("Lens fetch failed: {}", err);
                        first_error.get_or_insert(err);
                    }
                }

                join = match join {
                    JoinState::Empty => JoinState::LensDone,
                    JoinState::HierarchyDone { pending } => {
                        if let Some(event) = pending {
                            bridge.deliver(event);
                        }
                        JoinState::Both
                    }
                    done => done,
                };
            }
            Leg::Hierarchy(result) => {
                let event = match result {
                    Ok(body) => {
                        state.root_subject = body.clone();
                        Some(ViewEvent::HierarchyReady { root_subject: body })
                    }
                    Err(err) => {
                        warn!("Hierarchy fetch failed: {}", err);
                        first_error.get_or_insert(err);
                        None
                    }
                };

                join = match join {
                    JoinState::Empty => JoinState::HierarchyDone { pending: event },
                    JoinState::LensDone => {
                        if let Some(event) = event {
                            bridge.deliver(event);
                        }
                        JoinState::Both
                    }
                    done => done,
                };
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
