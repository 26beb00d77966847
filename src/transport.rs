//! Injected capabilities: the HTTP fetch seam and the UI-facing side-effect
//! sink. The core never owns a socket or a DOM; the embedding shell does.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::perspective::Perspective;

/// Generic JSON GET against the dashboard API.
#[async_trait]
pub trait JsonClient: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError>;
}

/// Typed replacement for the DOM CustomEvent dispatch: what the resolver
/// tells the view as data arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The lens bundle is in; `library` is the renderable payload.
    LensReady { library: Value },

    /// The filtered hierarchy is in.
    HierarchyReady { root_subject: Value },
}

/// Side effects the resolution run can trigger in the embedding shell.
pub trait ViewBridge: Send + Sync {
    /// Navigate away; the run performs no data resolution after this.
    fn redirect(&self, location: &str);

    /// Surface a recoverable condition to the user without failing the run.
    fn report_non_fatal(&self, message: &str);

    /// Open the realtime channel keyed by perspective identity.
    fn subscribe_realtime(&self, perspective: &Perspective);

    /// Deliver a data-ready event to the view.
    fn deliver(&self, event: ViewEvent);
}
