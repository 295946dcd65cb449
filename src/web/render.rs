//! View rendering
//!
//! Rendering stays behind a seam: the resolver decides *which* view, a
//! [`ViewRenderer`] decides what that view looks like on the wire. The
//! shipped [`JsonViewRenderer`] emits a JSON error envelope; template-based
//! applications plug in their own renderer.

use async_trait::async_trait;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::resolver::Resolution;

/// Renders a resolved view into a response body.
///
/// Renderers never set the status line; the filter applies the resolved
/// status afterwards, and only where the request allows it.
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(&self, resolution: &Resolution) -> Response;
}

/// Default renderer: a JSON envelope with the view name, the model, a
/// timestamp, and a fresh incident id for log correlation.
#[derive(Clone, Default)]
pub struct JsonViewRenderer;

#[async_trait]
impl ViewRenderer for JsonViewRenderer {
    async fn render(&self, resolution: &Resolution) -> Response {
        let incident_id = Uuid::new_v4();
        tracing::debug!(
            "Rendering error view '{}' as JSON (incident {})",
            resolution.view_name,
            incident_id
        );

        Json(json!({
            "view": resolution.view_name,
            "model": resolution.model,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "incidentId": incident_id,
        }))
        .into_response()
    }
}
