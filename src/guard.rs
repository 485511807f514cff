//! Route guard: decides whether a navigation to a protected view renders the
//! view, redirects to login, or renders the access-denied view.
//!
//! The guard only controls which views are shown. The token is never
//! validated, so it must not be treated as a security boundary.

use axum::{
    extract::{FromRef, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    config::AppConfig,
    session::{CookieSession, SessionStore},
    views,
};

/// Required-role value that also admits the legacy "SA" abbreviation.
pub const LEGACY_SUPER_ADMIN: &str = "super_admin";

/// Upper-cases a role code and strips underscores. Used for comparison only.
pub fn normalize_role(code: &str) -> String {
    code.to_uppercase().replace('_', "")
}

/// roles_match
///
/// Compares a stored role code with a route's required role. The layers below
/// overlap on purpose and must be kept as they are: dropping any of them
/// changes which legacy role codes are granted access.
///
/// 1. exact match
/// 2. case-insensitive match
/// 3. match after [`normalize_role`]
/// 4. `super_admin` is granted to `SUPER_ADMIN` and `SA`
pub fn roles_match(stored: &str, required: &str) -> bool {
    stored == required
        || stored.to_uppercase() == required.to_uppercase()
        || normalize_role(stored) == normalize_role(required)
        || (required == LEGACY_SUPER_ADMIN && (stored == "SUPER_ADMIN" || stored == "SA"))
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Render,
    /// No session token: replace the navigation with the login view.
    RedirectToLogin,
    /// Authenticated but the role does not match: render the denial view.
    AccessDenied,
}

/// evaluate
///
/// Pure decision over a session snapshot and the route's required role. An
/// empty required role counts as none.
pub fn evaluate<S>(session: &S, required_role: Option<&str>) -> GuardDecision
where
    S: SessionStore + ?Sized,
{
    if !session.has_token() {
        return GuardDecision::RedirectToLogin;
    }

    match required_role.filter(|role| !role.is_empty()) {
        None => GuardDecision::Render,
        Some(required) if roles_match(&session.role_code(), required) => GuardDecision::Render,
        Some(_) => GuardDecision::AccessDenied,
    }
}

/// RouteGuard
///
/// Per-route guard configuration: a route either admits any authenticated
/// user or requires one role code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    required_role: Option<String>,
}

impl RouteGuard {
    pub fn any_user() -> Self {
        Self::default()
    }

    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            required_role: Some(role.into()),
        }
    }

    pub fn required_role(&self) -> Option<&str> {
        self.required_role.as_deref()
    }

    pub fn check<S: SessionStore + ?Sized>(&self, session: &S) -> GuardDecision {
        evaluate(session, self.required_role())
    }

    /// Whether a session holding `role_code` would be admitted, assuming it
    /// is authenticated.
    pub fn admits_role(&self, role_code: &str) -> bool {
        match self.required_role().filter(|role| !role.is_empty()) {
            None => true,
            Some(required) => roles_match(role_code, required),
        }
    }
}

/// GuardState
///
/// State handed to [`enforce`] for one group of routes.
#[derive(Clone)]
pub struct GuardState {
    pub config: AppConfig,
    pub guard: RouteGuard,
}

impl GuardState {
    pub fn new(config: AppConfig, guard: RouteGuard) -> Self {
        Self { config, guard }
    }
}

impl FromRef<GuardState> for AppConfig {
    fn from_ref(state: &GuardState) -> AppConfig {
        state.config.clone()
    }
}

/// enforce
///
/// Middleware wrapping protected views. Attach with
/// `middleware::from_fn_with_state(GuardState, enforce)` as a `route_layer`.
///
/// The redirect is a `303 See Other`, so the protected URL is replaced rather
/// than kept as a history entry to bounce back into.
pub async fn enforce(State(state): State<GuardState>, request: Request, next: Next) -> Response {
    let session = CookieSession::from_headers(request.headers(), &state.config);
    let decision = state.guard.check(&session);

    tracing::debug!(
        path = %request.uri().path(),
        required_role = state.guard.required_role().unwrap_or("-"),
        ?decision,
        "route guard evaluated"
    );

    match decision {
        GuardDecision::Render => next.run(request).await,
        GuardDecision::RedirectToLogin => Redirect::to(&state.config.login_path).into_response(),
        GuardDecision::AccessDenied => {
            tracing::info!(
                path = %request.uri().path(),
                required_role = state.guard.required_role().unwrap_or("-"),
                stored_role = %session.role_code(),
                "access denied"
            );
            (StatusCode::FORBIDDEN, Html(views::access_denied_page())).into_response()
        }
    }
}
