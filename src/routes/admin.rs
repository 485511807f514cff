use super::{ENGINEER, ProtectedRoute, SUPER_ADMIN};
use crate::{
    AppState,
    config::AppConfig,
    guard::{self, GuardState},
    handlers,
};
use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};

/// Role-restricted Router Module
///
/// Each view here declares the role code it requires. A signed-in user whose
/// role does not match gets the access-denied view (403), not a redirect.
pub fn admin_routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .merge(restricted(config, SUPER_ADMIN, get(handlers::super_admin)))
        .merge(restricted(config, ENGINEER, get(handlers::engineer)))
}

/// Mounts `handler` at `route.path`, wrapped in the route's own guard.
fn restricted(
    config: &AppConfig,
    route: ProtectedRoute,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    Router::new()
        .route(route.path, handler)
        .route_layer(middleware::from_fn_with_state(
            GuardState::new(config.clone(), route.guard()),
            guard::enforce,
        ))
}
