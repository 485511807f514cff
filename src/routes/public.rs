use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Pages reachable without a session. `/login` and `/logout` write and clear
/// the session cookies the guarded routes read.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        .route("/health", get(handlers::health))
        // Marketing and informational pages.
        .route("/", get(handlers::landing))
        .route("/about", get(handlers::about))
        .route("/services", get(handlers::services))
        .route("/contact", get(handlers::contact))
        // GET renders the form, POST starts the pseudo-session.
        .route("/login", get(handlers::login_form).post(handlers::login))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        // GET /api/session
        // JSON snapshot of the session, for the client-side dashboards.
        .route("/api/session", get(handlers::get_session))
}
