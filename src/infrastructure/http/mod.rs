pub mod request_id;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, synthesis::SynthesisController};
use crate::error::AppError;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::AudioStorageRepository;
use request_id::request_id_middleware;

/// JSON extractor that converts body rejections into the application's
/// structured error response instead of axum's plain-text default.
/// Callers always receive well-formed JSON, even for a malformed body.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Build the application router with all routes and layers configured
pub fn build_router(
    storage_repo: Arc<dyn AudioStorageRepository>,
    synthesis_controller: Arc<SynthesisController>,
) -> Router {
    // Synthesis route (public; the host platform enforces any auth)
    let synthesis_routes = Router::new()
        .route(
            "/api/synthesize",
            axum::routing::post(SynthesisController::synthesize),
        )
        .with_state(synthesis_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(storage_repo)
        .merge(synthesis_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// Browser clients call this endpoint directly, so every response carries
// permissive CORS headers and the layer answers OPTIONS preflights
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    storage_repo: Arc<dyn AudioStorageRepository>,
    synthesis_controller: Arc<SynthesisController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(storage_repo, synthesis_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
