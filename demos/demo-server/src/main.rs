use axum::{
    Json, Router,
    body::Body,
    http::Request,
    routing::get,
};
use faultview::prelude::*;
use thiserror::Error;
use tower::{BoxError, ServiceBuilder};
use tower_http::trace::TraceLayer;

type ServiceResult = std::result::Result<Response, BoxError>;

/// Carries the missing order id as a message parameter, so the trait is
/// implemented by hand instead of derived.
#[derive(Debug, Error)]
#[error("order {0} not found")]
struct OrderNotFound(String);

impl Fault for OrderNotFound {
    fn type_name(&self) -> &str {
        "OrderNotFound"
    }

    fn ancestors(&self) -> &[&str] {
        &["NotFoundFault", "DomainFault", "Error"]
    }

    fn code(&self) -> Option<&str> {
        Some("ORDER_NOT_FOUND")
    }

    fn params(&self) -> Vec<String> {
        vec![self.0.clone()]
    }
}

#[derive(Debug, Error, Fault)]
#[error("inventory service unavailable")]
#[fault(ancestors("UpstreamFault", "DomainFault", "Error"))]
struct InventoryDown;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting Faultview demo server...");

    // 1. Load the pattern table from the bundled config
    let config: ResolverConfig =
        toml::from_str(include_str!("../faultview.toml")).expect("Failed to parse faultview.toml");
    let table = config.into_table().expect("Invalid pattern table");

    // 2. Wire resolver, message catalog, and filter
    let resolver = Arc::new(ErrorViewResolver::with_trace(table, Arc::new(LogTrace)));

    let messages = StaticMessages::new();
    messages.insert("ORDER_NOT_FOUND", "order {0} not found");
    messages.insert_localized("de", "ORDER_NOT_FOUND", "Auftrag {0} nicht gefunden");

    let filter = Arc::new(ErrorViewFilter::new(resolver).with_messages(Arc::new(messages)));

    // 3. Wrap the fallible services in typed error view layers
    let orders = ServiceBuilder::new()
        .layer(ErrorViewLayer::<OrderNotFound>::new(filter.clone()))
        .service_fn(order_service);

    let inventory = ServiceBuilder::new()
        .layer(ErrorViewLayer::<InventoryDown>::new(filter))
        .service_fn(inventory_service);

    // 4. Create Router
    let router = Router::new()
        .route("/", get(index))
        .route_service("/orders/{id}", orders.clone())
        .route_service("/orders/{id}/export.pdf", orders)
        .route_service("/inventory", inventory)
        .layer(TraceLayer::new_for_http());

    // 5. Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("✅ Demo server running on http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("🛑 Shutting down...");
        })
        .await
        .unwrap();

    tracing::info!("👋 Demo server stopped");
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "faultview-demo",
        "try": [
            "/orders/1",
            "/orders/999",
            "/orders/999/export.pdf",
            "/inventory",
        ],
    }))
}

/// Pretends to look up an order; only id 1 exists.
async fn order_service(request: Request<Body>) -> ServiceResult {
    let path = request.uri().path();
    let id = path
        .trim_end_matches("/export.pdf")
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    if id == "1" {
        let order = serde_json::json!({ "id": id, "status": "shipped" });
        return Ok(Json(order).into_response());
    }

    Err(Box::new(OrderNotFound(id)))
}

/// The inventory backend is permanently down.
async fn inventory_service(_request: Request<Body>) -> ServiceResult {
    Err(Box::new(InventoryDown))
}
