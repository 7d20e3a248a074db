use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod validate;

pub mod routes;
use auth::ApiToken;
use routes::{products, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::{ApiError, MessageResponse};
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Aggregates the OpenAPI documentation for the four product endpoints and
/// their schemas. The generated JSON is served at `/api-docs/openapi.json`
/// and rendered by the Swagger UI at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_products,
        handlers::create_product,
        handlers::delete_product,
        handlers::update_product,
    ),
    components(
        schemas(
            models::Product,
            models::CreateProductRequest,
            models::UpdateProductRequest,
            error::MessageResponse,
        )
    ),
    tags(
        (name = "inventory-api", description = "Product inventory API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single shared container for everything a handler needs: the
/// repository and the loaded configuration. Cloned per request; both members
/// are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Persistence layer behind the ProductRepository trait.
    pub repo: RepositoryState,
    /// Immutable environment configuration, including the shared secret.
    pub config: AppConfig,
}

// FromRef lets extractors pull just the piece of state they need; the
// ApiToken extractor only ever sees the AppConfig.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Gates the product routes. The `ApiToken` extractor rejects the request
/// with the appropriate 401 before this function body runs; a request that
/// reaches `next.run` has presented the correct bearer token.
async fn auth_middleware(_token: ApiToken, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routing structure, applies the token gate to the product
/// routes, and wraps everything in the observability and CORS layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Swagger UI plus the generated OpenAPI JSON.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health check; the only route outside the gate.
        .merge(public::public_routes())
        // Every product route sits behind the bearer-token layer.
        .merge(
            products::product_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .with_state(state);

    // Request correlation and tracing, applied outermost so the generated
    // request id is present for the whole request lifecycle.
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request tracing span, tagging it with the method, URI, and
/// the x-request-id header so all log lines for one request correlate.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
