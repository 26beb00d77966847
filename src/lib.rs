//! Client-side perspective resolution core for real-time dashboards.
//!
//! A perspective is a named, filterable view over a subject hierarchy plus
//! an associated lens (the module that renders it). This crate owns the
//! non-visual half of loading one: deciding between redirect, error, and
//! proceed; fetching the lens and the filtered hierarchy concurrently with
//! a race-free "both ready" rendezvous; and deriving the canonical filter
//! query string and per-field option configuration that drive the picker UI.
//!
//! Rendering, drag-and-drop, and the realtime/HTTP transports stay outside:
//! they are injected through [`transport::JsonClient`] and
//! [`transport::ViewBridge`].

pub mod config;
pub mod error;
pub mod options;
pub mod perspective;
pub mod resolver;
pub mod transport;

pub use config::ResolverConfig;
pub use error::{ConfigError, LensviewError, ResolveError, TransportError};
pub use options::{field_config, FieldCatalog, FieldConfig, KeyUpFilter, Selection};
pub use perspective::{FilterType, Perspective, ResolvedPerspective};
pub use resolver::{PerspectiveRequest, Resolution, Resolver};
pub use transport::{JsonClient, ViewBridge, ViewEvent};
