use axum::{Router, http::header, routing::get};
use dtmoney::api::{handlers::api_routes, openapi::ApiDoc};
use dtmoney::config::CONFIG;
use dtmoney::core::services::TransactionService;
use dtmoney::infrastructure::storage::in_memory::InMemoryStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();

    let storage = match &CONFIG.data_file {
        Some(path) => {
            let data = tokio::fs::read_to_string(path).await?;
            let storage = InMemoryStorage::from_json(&data)?;
            info!("Seeded transactions from {}", path);
            storage
        }
        None => InMemoryStorage::new(),
    };
    let service = Arc::new(TransactionService::new(storage));

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .merge(api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
