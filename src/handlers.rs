use crate::{
    config::AppConfig,
    guard::{LEGACY_SUPER_ADMIN, roles_match},
    models::{
        DashboardStats, LoginForm, RoleRecord, SessionInfo, UserInfo, sample_activity,
        sample_system_health,
    },
    nav::{NavQuery, dashboard_navigation},
    session::{CookieSession, SessionStore, clear_cookie, encode_record, set_cookie},
    views::{self, EdrsPanel},
};
use axum::{
    Form, Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use uuid::Uuid;

// --- Public Pages ---

/// health
///
/// [Public Route] Liveness probe for load balancers.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health() -> &'static str {
    "ok"
}

pub async fn landing() -> Html<String> {
    Html(views::landing_page())
}

pub async fn about() -> Html<String> {
    Html(views::about_page())
}

pub async fn services() -> Html<String> {
    Html(views::services_page())
}

pub async fn contact() -> Html<String> {
    Html(views::contact_page())
}

pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

// --- Session Lifecycle ---

/// login
///
/// [Public Route] Pseudo-login. Accepts any email and role code, writes the
/// token, user-info and role cookies, then redirects to the landing dashboard
/// for that role. No credential is verified.
pub async fn login(State(config): State<AppConfig>, Form(form): Form<LoginForm>) -> Response {
    let email = form.email.trim();
    if email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(views::login_page(Some("Email is required."))),
        )
            .into_response();
    }

    let user = UserInfo {
        email: email.to_string(),
        name: form.name.filter(|name| !name.trim().is_empty()),
    };
    let role = RoleRecord::new(form.role.trim());
    let token = Uuid::new_v4().to_string();

    let (user_value, role_value) = match (encode_record(&user), encode_record(&role)) {
        (Ok(user_value), Ok(role_value)) => (user_value, role_value),
        (Err(err), _) | (_, Err(err)) => {
            tracing::error!("failed to encode session records: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let target = if roles_match(&role.code, LEGACY_SUPER_ADMIN) {
        "/super-admin"
    } else {
        "/dashboard"
    };

    tracing::info!(email = %user.email, role = %role.code, "session started");

    (
        AppendHeaders([
            (header::SET_COOKIE, set_cookie(&config.token_cookie, &token)),
            (header::SET_COOKIE, set_cookie(&config.user_cookie, &user_value)),
            (header::SET_COOKIE, set_cookie(&config.role_cookie, &role_value)),
        ]),
        Redirect::to(target),
    )
        .into_response()
}

/// logout
///
/// [Public Route] Clears all session cookies and returns to the login view.
pub async fn logout(State(config): State<AppConfig>) -> Response {
    (
        AppendHeaders([
            (header::SET_COOKIE, clear_cookie(&config.token_cookie)),
            (header::SET_COOKIE, clear_cookie(&config.user_cookie)),
            (header::SET_COOKIE, clear_cookie(&config.role_cookie)),
        ]),
        Redirect::to(&config.login_path),
    )
        .into_response()
}

/// get_session
///
/// [Public Route] Returns the current session snapshot as JSON. Unauthenticated
/// callers get `authenticated: false`.
#[utoipa::path(
    get,
    path = "/api/session",
    responses((status = 200, description = "Current session", body = SessionInfo))
)]
pub async fn get_session(session: CookieSession) -> Json<SessionInfo> {
    Json(session.snapshot())
}

// --- Guarded Views ---
// Every handler below is mounted behind `guard::enforce`; by the time it runs
// the session holds a token and, where required, a matching role.

pub async fn dashboard(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    let role_code = session.role_code();
    let sections = dashboard_navigation(&role_code, nav.open.as_deref());
    Html(views::dashboard_page(
        session.user_info().as_ref(),
        &role_code,
        &DashboardStats::sample(),
        &sample_activity(Utc::now()),
        &sections,
    ))
}

pub async fn engineer(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    let sections = dashboard_navigation(&session.role_code(), nav.open.as_deref());
    Html(views::engineer_page(&sections))
}

pub async fn super_admin(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    let sections = dashboard_navigation(&session.role_code(), nav.open.as_deref());
    Html(views::super_admin_page(
        &DashboardStats::sample(),
        &sample_system_health(),
        &sections,
    ))
}

async fn edrs_panel(panel: EdrsPanel, session: CookieSession, nav: NavQuery) -> Html<String> {
    let sections = dashboard_navigation(&session.role_code(), nav.open.as_deref());
    Html(views::edrs_panel_page(panel, &sections))
}

pub async fn edrs_upload(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    edrs_panel(EdrsPanel::Upload, session, nav).await
}

pub async fn edrs_documents(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    edrs_panel(EdrsPanel::Documents, session, nav).await
}

pub async fn edrs_insights(session: CookieSession, Query(nav): Query<NavQuery>) -> Html<String> {
    edrs_panel(EdrsPanel::Insights, session, nav).await
}
