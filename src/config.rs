use std::env;

/// AppConfig
///
/// Holds the portal's configuration state. Immutable once loaded and shared with
/// every handler and guard layer through `AppState` (see `FromRef` in lib.rs).
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects log format and fail-fast behaviour.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // Path of the login view that unauthenticated navigations are redirected to.
    pub login_path: String,
    // Cookie carrying the opaque access token.
    pub token_cookie: String,
    // Cookie carrying the JSON-encoded user-role record.
    pub role_cookie: String,
    // Cookie carrying the JSON-encoded user-info record.
    pub user_cookie: String,
}

/// Env
///
/// Defines the runtime context: pretty logs and relaxed defaults locally,
/// JSON logs and mandatory settings in production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_TOKEN_COOKIE: &str = "token";
pub const DEFAULT_ROLE_COOKIE: &str = "userRole";
pub const DEFAULT_USER_COOKIE: &str = "userInfo";

impl Default for AppConfig {
    /// default
    ///
    /// Non-panicking configuration used by tests and by `Env::Local` fallbacks.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
            role_cookie: DEFAULT_ROLE_COOKIE.to_string(),
            user_cookie: DEFAULT_USER_COOKIE.to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// Panics in `Env::Production` when `BIND_ADDR` is not set, so a production
    /// deployment never silently listens on the development address.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = match env {
            Env::Production => {
                env::var("BIND_ADDR").expect("FATAL: BIND_ADDR must be set in production.")
            }
            Env::Local => env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        };

        Self {
            env,
            bind_addr,
            login_path: var_or("LOGIN_PATH", DEFAULT_LOGIN_PATH),
            token_cookie: var_or("TOKEN_COOKIE", DEFAULT_TOKEN_COOKIE),
            role_cookie: var_or("ROLE_COOKIE", DEFAULT_ROLE_COOKIE),
            user_cookie: var_or("USER_COOKIE", DEFAULT_USER_COOKIE),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
