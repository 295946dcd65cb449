//! Tower layer
//!
//! Catches errors surfaced by an inner service, downcasts them to the
//! application's fault type, and lets the filter answer with a resolved
//! error view. Anything the filter declines becomes a plain 500, so the
//! composed service is infallible and can sit inside an axum router.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{Request, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service, ServiceExt};

use crate::fault::Fault;
use crate::messages::DEFAULT_LOCALE;
use crate::shape::RequestShape;
use crate::web::filter::ErrorViewFilter;

/// Layer wiring [`ErrorViewFilter`] into a tower stack for fault type `F`.
pub struct ErrorViewLayer<F> {
    filter: Arc<ErrorViewFilter>,
    _fault: PhantomData<F>,
}

impl<F> ErrorViewLayer<F> {
    pub fn new(filter: Arc<ErrorViewFilter>) -> Self {
        Self {
            filter,
            _fault: PhantomData,
        }
    }
}

impl<F> Clone for ErrorViewLayer<F> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            _fault: PhantomData,
        }
    }
}

impl<S, F> Layer<S> for ErrorViewLayer<F> {
    type Service = ErrorViewMiddleware<S, F>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorViewMiddleware {
            inner,
            filter: self.filter.clone(),
            _fault: PhantomData,
        }
    }
}

/// Middleware produced by [`ErrorViewLayer`].
pub struct ErrorViewMiddleware<S, F> {
    inner: S,
    filter: Arc<ErrorViewFilter>,
    _fault: PhantomData<F>,
}

impl<S: Clone, F> Clone for ErrorViewMiddleware<S, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            filter: self.filter.clone(),
            _fault: PhantomData,
        }
    }
}

impl<S, F> Service<Request<Body>> for ErrorViewMiddleware<S, F>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    F: Fault,
{
    type Response = Response;
    type Error = std::convert::Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // readiness is driven on the cloned service inside `call`
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let filter = self.filter.clone();
        let inner = self.inner.clone();

        Box::pin(async move {
            // capture the request facts before the service consumes the body
            let (parts, body) = request.into_parts();
            let shape = RequestShape::from_parts(&parts);
            let locale = request_locale(&parts);
            let request = Request::from_parts(parts, body);

            match inner.oneshot(request).await {
                Ok(response) => Ok(response),
                Err(error) => {
                    let error: Box<dyn std::error::Error + Send + Sync> = error.into();
                    match error.downcast::<F>() {
                        Ok(fault) => {
                            if let Some(response) =
                                filter.catch(fault.as_ref(), &shape, &locale).await
                            {
                                return Ok(response);
                            }
                            tracing::warn!("No error view resolved for fault: {}", fault);
                            Ok(internal_error())
                        }
                        Err(error) => {
                            tracing::error!("Unhandled error reached error view layer: {}", error);
                            Ok(internal_error())
                        }
                    }
                }
            }
        })
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

/// First language tag of the `Accept-Language` header, or the default locale.
fn request_locale(parts: &Parts) -> String {
    parts
        .headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ErrorViewResolver;
    use crate::table::PatternTable;
    use crate::web::ErrorStatus;
    use tower::service_fn;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Debug)]
    struct OrderMissing;

    impl std::fmt::Display for OrderMissing {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "order not found")
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
    }

    fn filter() -> Arc<ErrorViewFilter> {
        let table = PatternTable::builder()
            .exception("NotFoundFault", "notFound")
            .status("notFound", StatusCode::NOT_FOUND)
            .build();
        Arc::new(ErrorViewFilter::new(Arc::new(ErrorViewResolver::new(
            table,
        ))))
    }

    #[tokio::test]
    async fn test_successful_responses_pass_through() {
        let service = service_fn(|_request: Request<Body>| async {
            Ok::<_, BoxError>((StatusCode::OK, "fine").into_response())
        });
        let service = ErrorViewLayer::<OrderMissing>::new(filter()).layer(service);

        let response = service
            .oneshot(Request::builder().uri("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fault_maps_to_error_view() {
        let service = service_fn(|_request: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(OrderMissing))
        });
        let service = ErrorViewLayer::<OrderMissing>::new(filter()).layer(service);

        let response = service
            .oneshot(Request::builder().uri("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.extensions().get::<ErrorStatus>(),
            Some(&ErrorStatus(StatusCode::NOT_FOUND))
        );
    }

    #[tokio::test]
    async fn test_foreign_error_becomes_internal_error() {
        let service = service_fn(|_request: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(std::io::Error::other("disk gone")))
        });
        let service = ErrorViewLayer::<OrderMissing>::new(filter()).layer(service);

        let response = service
            .oneshot(Request::builder().uri("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<ErrorStatus>().is_none());
    }

    #[tokio::test]
    async fn test_unresolved_fault_becomes_internal_error() {
        let empty = Arc::new(ErrorViewFilter::new(Arc::new(ErrorViewResolver::new(
            PatternTable::default(),
        ))));
        let service = service_fn(|_request: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(OrderMissing))
        });
        let service = ErrorViewLayer::<OrderMissing>::new(empty).layer(service);

        let response = service
            .oneshot(Request::builder().uri("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_async_client_gets_bad_request() {
        // notFoundAjax has no explicit status, so the async fallback applies
        let table = PatternTable::builder()
            .exception("NotFoundFault", "notFoundAjax")
            .build();
        let filter = Arc::new(ErrorViewFilter::new(Arc::new(ErrorViewResolver::new(
            table,
        ))));
        let service = service_fn(|_request: Request<Body>| async {
            Err::<Response, BoxError>(Box::new(OrderMissing))
        });
        let service = ErrorViewLayer::<OrderMissing>::new(filter).layer(service);

        let request = Request::builder()
            .uri("/orders/1")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(Body::empty())
            .unwrap();
        let response = service.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_locale_parsing() {
        let (parts, _) = Request::builder()
            .uri("/orders/1")
            .header("Accept-Language", "de-DE;q=0.9, en;q=0.8")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(request_locale(&parts), "de-DE");

        let (parts, _) = Request::builder()
            .uri("/orders/1")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(request_locale(&parts), DEFAULT_LOCALE);
    }
}
