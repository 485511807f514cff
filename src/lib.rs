use axum::{Router, extract::FromRef, http::HeaderName};
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

pub mod config;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod nav;
pub mod session;
pub mod views;

// Routes grouped by the guard wrapping them (public, any user, role-restricted).
pub mod routes;
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use guard::{GuardDecision, RouteGuard, evaluate, normalize_role, roles_match};
pub use session::{CookieSession, MemorySession, SessionStore};

/// ApiDoc
///
/// OpenAPI document for the JSON endpoints, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::get_session),
    components(
        schemas(
            models::SessionInfo, models::UserInfo, models::RoleRecord,
            models::DashboardStats, models::ActivityItem, models::SystemHealth,
        )
    ),
    tags(
        (name = "edrs-portal", description = "EDRS portal session API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable state for every request. The portal has no backing
/// services, so this is only the configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the route groups, their guards, and the observability layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        // Any signed-in user.
        .merge(authenticated::authenticated_routes(&state.config))
        // Role-restricted views; each carries its own required role.
        .merge(admin::admin_routes(&state.config))
        .with_state(state);

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
/// Builds the per-request span, tagged with the `x-request-id` set above so
/// every log line of one navigation (guard decision included) correlates.
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
