//! Request shape
//!
//! The minimal facts about an inbound request that resolution cares about.
//! Everything else about the request stays with the transport.

use axum::http::header;
use axum::http::request::Parts;

/// Request facts consumed by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestShape {
    /// Request path, matched against suffix mappings.
    pub path: String,
    /// True when the client signalled it wants a structured error response
    /// (XMLHttpRequest or a JSON `Accept` header) rather than a rendered page.
    pub async_style: bool,
    /// False for responses composed into a larger response, where the status
    /// line must not be touched.
    pub can_set_status: bool,
}

impl RequestShape {
    /// A plain, status-settable request for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            async_style: false,
            can_set_status: true,
        }
    }

    /// Derive the shape from request parts.
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            path: parts.uri.path().to_string(),
            async_style: is_xml_http_request(parts) || accepts_json(parts),
            can_set_status: true,
        }
    }

    /// Mark this request as a sub-include of a larger response.
    pub fn as_include(mut self) -> Self {
        self.can_set_status = false;
        self
    }
}

fn is_xml_http_request(parts: &Parts) -> bool {
    parts
        .headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

fn accepts_json(parts: &Parts) -> bool {
    parts
        .headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}
