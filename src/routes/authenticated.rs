use super::{DASHBOARD, EDRS_DOCUMENTS, EDRS_INSIGHTS, EDRS_UPLOAD};
use crate::{
    AppState,
    config::AppConfig,
    guard::{self, GuardState, RouteGuard},
    handlers,
};
use axum::{Router, middleware, routing::get};

/// Authenticated Router Module
///
/// Dashboard and EDRS panels. Any session with a token may open them; the role
/// record is not consulted. Sessions without a token are redirected to login.
pub fn authenticated_routes(config: &AppConfig) -> Router<AppState> {
    Router::<AppState>::new()
        .route(DASHBOARD.path, get(handlers::dashboard))
        .route(EDRS_UPLOAD.path, get(handlers::edrs_upload))
        .route(EDRS_DOCUMENTS.path, get(handlers::edrs_documents))
        .route(EDRS_INSIGHTS.path, get(handlers::edrs_insights))
        .route_layer(middleware::from_fn_with_state(
            GuardState::new(config.clone(), RouteGuard::any_user()),
            guard::enforce,
        ))
}
