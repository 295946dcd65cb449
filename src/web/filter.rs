//! Error view filter
//!
//! The piece that turns a caught fault into a rendered response: derive the
//! descriptor (localizing business-coded messages first), resolve, render,
//! and apply the status where the request allows it.

use std::sync::Arc;

use axum::response::Response;

use crate::fault::{Fault, FaultDescriptor};
use crate::messages::MessageLookup;
use crate::resolver::ErrorViewResolver;
use crate::shape::RequestShape;
use crate::web::ErrorStatus;
use crate::web::render::{JsonViewRenderer, ViewRenderer};

/// Resolves faults to rendered error responses.
pub struct ErrorViewFilter {
    resolver: Arc<ErrorViewResolver>,
    renderer: Arc<dyn ViewRenderer>,
    messages: Option<Arc<dyn MessageLookup>>,
}

impl ErrorViewFilter {
    /// Create a filter rendering through [`JsonViewRenderer`].
    pub fn new(resolver: Arc<ErrorViewResolver>) -> Self {
        Self {
            resolver,
            renderer: Arc::new(JsonViewRenderer),
            messages: None,
        }
    }

    /// Swap in a custom renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn ViewRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Attach a message catalog for business-coded faults.
    pub fn with_messages(mut self, messages: Arc<dyn MessageLookup>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Resolve and render one fault.
    ///
    /// Returns `None` when no view resolves; the caller falls through to its
    /// own handling. When a view resolves, the status is written to the
    /// response and recorded as an [`ErrorStatus`] extension, unless the
    /// shape forbids touching the status line.
    pub async fn catch(
        &self,
        fault: &dyn Fault,
        shape: &RequestShape,
        locale: &str,
    ) -> Option<Response> {
        let descriptor = self.describe(fault, locale);
        let resolution = self.resolver.resolve(&descriptor, shape)?;

        tracing::debug!(
            "Fault '{}' resolved to view '{}'",
            descriptor.type_name(),
            resolution.view_name
        );

        let mut response = self.renderer.render(&resolution).await;
        if let Some(status) = resolution.status {
            if shape.can_set_status {
                *response.status_mut() = status;
                response.extensions_mut().insert(ErrorStatus(status));
            }
        }

        Some(response)
    }

    /// Build the descriptor, re-deriving the message from the catalog when
    /// the fault carries an error code.
    fn describe(&self, fault: &dyn Fault, locale: &str) -> FaultDescriptor {
        let descriptor = FaultDescriptor::from_fault(fault);

        let localized = match (&self.messages, descriptor.code()) {
            (Some(messages), Some(code)) => {
                messages.message(code, descriptor.params(), locale)
            }
            _ => None,
        };

        match localized {
            Some(message) => descriptor.with_message(message),
            None => descriptor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{DEFAULT_LOCALE, StaticMessages};
    use crate::table::PatternTable;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[derive(Debug)]
    struct OrderMissing {
        id: u64,
    }

    impl std::fmt::Display for OrderMissing {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "order {} not found", self.id)
        }
    }

    impl std::error::Error for OrderMissing {}

    impl Fault for OrderMissing {
        fn type_name(&self) -> &str {
            "OrderMissing"
        }

        fn ancestors(&self) -> &[&str] {
            &["NotFoundFault", "Error"]
        }

        fn code(&self) -> Option<&str> {
            Some("ORDER_NOT_FOUND")
        }

        fn params(&self) -> Vec<String> {
            vec![self.id.to_string()]
        }
    }

    fn filter() -> ErrorViewFilter {
        let table = PatternTable::builder()
            .exception("NotFoundFault", "notFound")
            .status("notFound", StatusCode::NOT_FOUND)
            .build();
        ErrorViewFilter::new(Arc::new(ErrorViewResolver::new(table)))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_catch_renders_resolved_view() {
        let shape = RequestShape::new("/orders/42");

        let response = filter()
            .catch(&OrderMissing { id: 42 }, &shape, DEFAULT_LOCALE)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.extensions().get::<ErrorStatus>(),
            Some(&ErrorStatus(StatusCode::NOT_FOUND))
        );

        let body = body_json(response).await;
        assert_eq!(body["view"], "notFound");
        assert_eq!(body["model"]["className"], "OrderMissing");
        assert_eq!(body["model"]["errorCode"], "ORDER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_include_request_keeps_status_line() {
        let shape = RequestShape::new("/orders/42").as_include();

        let response = filter()
            .catch(&OrderMissing { id: 42 }, &shape, DEFAULT_LOCALE)
            .await
            .unwrap();

        // view still renders, but the status line stays untouched
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.extensions().get::<ErrorStatus>().is_none());
    }

    #[tokio::test]
    async fn test_unmatched_fault_is_none() {
        let filter = ErrorViewFilter::new(Arc::new(ErrorViewResolver::new(
            PatternTable::default(),
        )));
        let shape = RequestShape::new("/orders/42");

        let response = filter
            .catch(&OrderMissing { id: 42 }, &shape, DEFAULT_LOCALE)
            .await;

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_business_code_message_rederived() {
        let messages = StaticMessages::new();
        messages.insert_localized("de", "ORDER_NOT_FOUND", "Auftrag {0} nicht gefunden");

        let filter = filter().with_messages(Arc::new(messages));
        let shape = RequestShape::new("/orders/42");

        let response = filter
            .catch(&OrderMissing { id: 42 }, &shape, "de")
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["model"]["exception"], "Auftrag 42 nicht gefunden");
        // code and class survive the re-derivation
        assert_eq!(body["model"]["errorCode"], "ORDER_NOT_FOUND");
        assert_eq!(body["model"]["className"], "OrderMissing");
    }

    #[tokio::test]
    async fn test_unknown_code_keeps_original_message() {
        let filter = filter().with_messages(Arc::new(StaticMessages::new()));
        let shape = RequestShape::new("/orders/42");

        let response = filter
            .catch(&OrderMissing { id: 42 }, &shape, DEFAULT_LOCALE)
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["model"]["exception"], "order 42 not found");
    }
}
