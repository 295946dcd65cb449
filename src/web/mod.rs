//! Web integration
//!
//! Ties resolution into an axum service: the filter turns a caught fault
//! into a rendered response, and the layer feeds service errors into the
//! filter from anywhere in a tower stack.

pub mod filter;
pub mod layer;
pub mod render;

pub use filter::ErrorViewFilter;
pub use layer::{ErrorViewLayer, ErrorViewMiddleware};
pub use render::{JsonViewRenderer, ViewRenderer};

use axum::http::StatusCode;

/// Response extension recording the status applied by error view resolution.
///
/// Downstream middleware can read it to distinguish a resolved error status
/// from one the handler produced itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStatus(pub StatusCode);
