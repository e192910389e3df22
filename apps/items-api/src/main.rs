use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{HealthCheckFuture, create_app, create_router, health_router, run_health_checks};
use core_config::app_info;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{ApiDoc, EsItemRepository, ItemService, handlers};
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    info!(
        url = %config.elasticsearch.url,
        index = %config.elasticsearch.index,
        "Connecting to Elasticsearch"
    );
    let repository = EsItemRepository::from_config(&config.elasticsearch)?;
    let service = ItemService::new(repository.clone());

    // Domain routers apply their own state
    let api_routes = Router::new().nest("/items", handlers::router(service));

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<ApiDoc>(api_routes);

    // Merge health endpoints into the app
    // - /ping: plain liveness probe
    // - /health: liveness check with app name/version
    // - /ready: readiness check against the search backend
    let app = router
        .route("/ping", get(ping_handler))
        .merge(health_router(app_info!()))
        .merge(ready_router(repository));

    create_app(app, &config.server).await?;

    info!("Items API shutdown complete");
    Ok(())
}

async fn ping_handler() -> &'static str {
    "pong"
}

fn ready_router(repository: EsItemRepository) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(repository)
}

async fn ready_handler(State(repository): State<EsItemRepository>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "elasticsearch",
        Box::pin(async move { repository.ping().await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let app = Router::new().route("/ping", get(ping_handler));
        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"pong");
    }
}
