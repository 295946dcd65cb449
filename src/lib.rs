//! # Faultview
//!
//! Error view resolution for axum services.
//!
//! Faultview decides, for every fault raised while handling a request, which
//! named view should render it, which HTTP status accompanies it, and what
//! model the view receives. Three prioritized strategies feed the decision:
//!
//! - **Suffix matching**: the request path's extension picks the view
//!   (`.pdf` routes to the PDF error view), overriding everything else.
//! - **Closest-ancestor matching**: patterns are matched by substring against
//!   the fault's declared ancestry; the match closest to the concrete type
//!   wins, so one short base-type pattern covers a whole fault family while
//!   exact-type rules still take priority.
//! - **Defaults**: a fallback view and status for everything else.
//!
//! Status derivation layers explicit per-view overrides over an async-client
//! bad-request fallback over the table default. Resolution is pure and
//! lock-free; the pattern table is immutable and swapped atomically on
//! reload.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use axum::http::StatusCode;
//! use faultview::prelude::*;
//!
//! #[derive(Debug, thiserror::Error, Fault)]
//! #[error("order {id} not found")]
//! #[fault(code = "ORDER_NOT_FOUND", ancestors("NotFoundFault", "Error"))]
//! struct OrderNotFound {
//!     id: u64,
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     tracing_subscriber::fmt().init();
//!
//!     let table = PatternTable::builder()
//!         .suffix("pdf", "pdfError")
//!         .exception("NotFoundFault", "notFound")
//!         .status("notFound", StatusCode::NOT_FOUND)
//!         .default_view("error")
//!         .default_status(StatusCode::INTERNAL_SERVER_ERROR)
//!         .build();
//!
//!     let resolver = Arc::new(ErrorViewResolver::with_trace(table, Arc::new(LogTrace)));
//!     let filter = Arc::new(ErrorViewFilter::new(resolver));
//!
//!     // wrap any fallible tower service; the composed service is infallible
//!     let layer = ErrorViewLayer::<OrderNotFound>::new(filter);
//!     let _ = layer;
//! }
//! ```

pub mod error;
pub mod fault;
pub mod messages;
pub mod resolver;
pub mod shape;
pub mod table;
pub mod trace;
pub mod web;

// Re-export core types
pub use error::{ConfigError, Result};
pub use fault::{Fault, FaultDescriptor};
pub use messages::{MessageLookup, StaticMessages};
pub use resolver::{ErrorViewResolver, Resolution, StatusSource, resolve_with};
pub use shape::RequestShape;
pub use table::{
    DEFAULT_EXCEPTION_ATTRIBUTE, PatternTable, PatternTableBuilder, ResolverConfig,
};
pub use trace::{LogTrace, NoopTrace, ResolutionTrace, TraceEvent};
pub use web::{ErrorStatus, ErrorViewFilter, ErrorViewLayer, JsonViewRenderer, ViewRenderer};

// Re-export macros
pub use faultview_macros::Fault as DeriveFault;

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use faultview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::DeriveFault as Fault;
    pub use crate::error::{ConfigError, Result};
    pub use crate::fault::{Fault, FaultDescriptor};
    pub use crate::messages::{MessageLookup, StaticMessages};
    pub use crate::resolver::{ErrorViewResolver, Resolution, StatusSource};
    pub use crate::shape::RequestShape;
    pub use crate::table::{PatternTable, PatternTableBuilder, ResolverConfig};
    pub use crate::trace::{LogTrace, NoopTrace, ResolutionTrace, TraceEvent};
    pub use crate::web::{
        ErrorStatus, ErrorViewFilter, ErrorViewLayer, JsonViewRenderer, ViewRenderer,
    };
    pub use async_trait::async_trait;
    pub use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
