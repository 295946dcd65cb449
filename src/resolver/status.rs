//! Status derivation
//!
//! Computes the status code for a chosen view. Pure: applying the status to a
//! live response is the web layer's job, and is skipped entirely for
//! responses that cannot set one.

use axum::http::StatusCode;
use strum_macros::Display;

use crate::shape::RequestShape;
use crate::table::PatternTable;

/// Where a resolved status code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusSource {
    /// An explicit view→status entry in the table.
    ViewMapping,
    /// The fixed bad-request fallback for async-style requests.
    AsyncFallback,
    /// The table's default status.
    TableDefault,
}

/// Derive the status for a view.
///
/// Priority: explicit view mapping, then the async-style bad-request
/// fallback, then the table default. `None` means no explicit status; the
/// transport's own default stands.
pub fn resolve(view: &str, shape: &RequestShape, table: &PatternTable) -> Option<StatusCode> {
    resolve_with_source(view, shape, table).map(|(status, _)| status)
}

/// Like [`resolve`], but also reports which rule produced the status.
pub(crate) fn resolve_with_source(
    view: &str,
    shape: &RequestShape,
    table: &PatternTable,
) -> Option<(StatusCode, StatusSource)> {
    if let Some(status) = table.status_for(view) {
        return Some((status, StatusSource::ViewMapping));
    }

    if shape.async_style {
        // async clients expect a structured error status, never a page-style
        // default
        return Some((StatusCode::BAD_REQUEST, StatusSource::AsyncFallback));
    }

    table
        .default_status()
        .map(|status| (status, StatusSource::TableDefault))
}
