use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// --- Session Records (persisted in session cookies) ---

/// RoleRecord
///
/// The user-role record written at login. Only `code` takes part in route
/// authorization; `description` is display text for the dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct RoleRecord {
    // Short permission-class identifier, e.g. "ENGINEER", "SUPER_ADMIN", "SA".
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RoleRecord {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// UserInfo
///
/// The user-info record written at login and shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UserInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserInfo {
    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

// --- Request Payloads ---

/// LoginForm
///
/// Form body of POST /login. No credential is checked: the submitted role code
/// is written to the session as-is.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
}

// --- Response Payloads ---

/// SessionInfo
///
/// JSON view of the current session snapshot served at GET /api/session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
    pub role: Option<RoleRecord>,
}

// --- Dashboard Mock Data ---

/// DashboardStats
///
/// Headline figures shown on the dashboards. Static placeholder values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DashboardStats {
    pub documents_processed: u32,
    pub pending_reviews: u32,
    pub active_engineers: u32,
    pub extraction_accuracy: f32,
}

impl DashboardStats {
    pub fn sample() -> Self {
        Self {
            documents_processed: 1_284,
            pending_reviews: 37,
            active_engineers: 18,
            extraction_accuracy: 97.4,
        }
    }
}

/// ActivityItem
///
/// One entry of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ActivityItem {
    pub title: String,
    pub actor: String,
    #[ts(type = "string")]
    pub at: DateTime<Utc>,
}

/// Placeholder activity feed, timestamped relative to `now`.
pub fn sample_activity(now: DateTime<Utc>) -> Vec<ActivityItem> {
    [
        ("P&ID sheet 14 digitized", "EDRS extractor", 4),
        ("Valve schedule reviewed", "j.okafor", 26),
        ("Datasheet batch uploaded", "m.lindqvist", 95),
        ("Drawing register exported", "EDRS extractor", 240),
    ]
    .into_iter()
    .map(|(title, actor, minutes_ago)| ActivityItem {
        title: title.to_string(),
        actor: actor.to_string(),
        at: now - Duration::minutes(minutes_ago),
    })
    .collect()
}

/// SystemHealth
///
/// Per-service status rows on the super-admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SystemHealth {
    pub service: String,
    pub status: String,
    pub uptime_percent: f32,
}

pub fn sample_system_health() -> Vec<SystemHealth> {
    [
        ("Document ingestion", "operational", 99.98),
        ("OCR workers", "operational", 99.91),
        ("Tag extraction", "degraded", 98.40),
        ("Notification relay", "operational", 100.0),
    ]
    .into_iter()
    .map(|(service, status, uptime_percent)| SystemHealth {
        service: service.to_string(),
        status: status.to_string(),
        uptime_percent,
    })
    .collect()
}
