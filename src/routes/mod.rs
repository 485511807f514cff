/// Router Module Index
///
/// Routes are grouped by the guard that wraps them, so access control is
/// applied once per group as an axum `route_layer`.

/// Routes open to everyone: marketing pages, login/logout, health.
pub mod public;

/// Views any signed-in user may open.
pub mod authenticated;

/// Views restricted to a single role code.
pub mod admin;

use crate::guard::RouteGuard;

/// ProtectedRoute
///
/// A guarded path and the role it requires. The routers and the dashboard
/// navigation both read their guards from these constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedRoute {
    pub path: &'static str,
    pub required_role: Option<&'static str>,
}

impl ProtectedRoute {
    pub fn guard(&self) -> RouteGuard {
        match self.required_role {
            Some(role) => RouteGuard::with_role(role),
            None => RouteGuard::any_user(),
        }
    }
}

const fn any_user(path: &'static str) -> ProtectedRoute {
    ProtectedRoute {
        path,
        required_role: None,
    }
}

pub const DASHBOARD: ProtectedRoute = any_user("/dashboard");
pub const EDRS_UPLOAD: ProtectedRoute = any_user("/edrs/upload");
pub const EDRS_DOCUMENTS: ProtectedRoute = any_user("/edrs/documents");
pub const EDRS_INSIGHTS: ProtectedRoute = any_user("/edrs/insights");
pub const ENGINEER: ProtectedRoute = ProtectedRoute {
    path: "/engineer",
    required_role: Some("ENGINEER"),
};
pub const SUPER_ADMIN: ProtectedRoute = ProtectedRoute {
    path: "/super-admin",
    required_role: Some("super_admin"),
};

pub const PROTECTED_ROUTES: [ProtectedRoute; 6] = [
    DASHBOARD,
    EDRS_UPLOAD,
    EDRS_DOCUMENTS,
    EDRS_INSIGHTS,
    ENGINEER,
    SUPER_ADMIN,
];
