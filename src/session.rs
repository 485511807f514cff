//! Session store: read access to the token, role record and user info that the
//! login flow persists in cookies.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::AppConfig,
    models::{RoleRecord, SessionInfo, UserInfo},
};

/// Errors raised while decoding or encoding session records.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A stored record is not valid JSON for its type.
    #[error("malformed session record '{key}': {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be serialized for storage.
    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// SessionStore
///
/// Read-only contract the route guard needs from whatever persists session
/// state. Implementations must never fail: absent or malformed records read
/// as `None`.
pub trait SessionStore {
    /// The raw access token, if one is stored.
    fn token(&self) -> Option<&str>;

    /// The parsed role record, `None` when absent or malformed.
    fn role_record(&self) -> Option<RoleRecord>;

    /// The parsed user-info record, `None` when absent or malformed.
    fn user_info(&self) -> Option<UserInfo> {
        None
    }

    /// An empty token counts as no token.
    fn has_token(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// The stored role code, empty when there is no usable role record.
    fn role_code(&self) -> String {
        self.role_record()
            .map(|record| record.code)
            .unwrap_or_default()
    }

    fn snapshot(&self) -> SessionInfo {
        SessionInfo {
            authenticated: self.has_token(),
            user: self.user_info(),
            role: self.role_record(),
        }
    }
}

impl RoleRecord {
    /// Strict decoding of a stored role record.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        decode_record("role", raw)
    }

    /// Decoding that maps any failure to `None`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        lenient(Self::parse(raw))
    }
}

impl UserInfo {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        decode_record("user", raw)
    }

    pub fn parse_lenient(raw: &str) -> Option<Self> {
        lenient(Self::parse(raw))
    }
}

fn decode_record<T: DeserializeOwned>(key: &'static str, raw: &str) -> Result<T, SessionError> {
    serde_json::from_str(raw).map_err(|source| SessionError::Malformed { key, source })
}

fn lenient<T>(result: Result<T, SessionError>) -> Option<T> {
    result
        .inspect_err(|err| tracing::debug!("ignoring session record: {err}"))
        .ok()
}

/// Serializes a record into a cookie-safe value.
///
/// The value is pure ASCII: `;` and every non-ASCII character are written as
/// JSON `\uXXXX` escapes (surrogate pairs above the BMP). Both only occur
/// inside JSON strings, so the value still decodes to the same record.
pub fn encode_record<T: Serialize>(record: &T) -> Result<String, SessionError> {
    let json = serde_json::to_string(record)?;
    let mut encoded = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() && ch != ';' {
            encoded.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            encoded.push_str(&format!("\\u{unit:04x}"));
        }
    }
    Ok(encoded)
}

/// Builds a `Set-Cookie` value storing `value` under `name`.
pub fn set_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; SameSite=Lax")
}

/// Builds a `Set-Cookie` value that deletes `name`.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

/// Splits every `Cookie` header into name/value pairs. The first occurrence of
/// a name wins.
///
/// Pairs are decoded one at a time from raw bytes, so a pair carrying
/// non-UTF-8 bytes only affects itself.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for value in headers.get_all(header::COOKIE) {
        for pair in value.as_bytes().split(|byte| *byte == b';') {
            let pair = String::from_utf8_lossy(pair);
            if let Some((name, value)) = pair.trim().split_once('=') {
                cookies
                    .entry(name.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
    }
    cookies
}

/// CookieSession
///
/// Snapshot of the session cookies of one request. Taken once per navigation;
/// the guard evaluates against this snapshot only.
#[derive(Debug, Clone, Default)]
pub struct CookieSession {
    token: Option<String>,
    role_raw: Option<String>,
    user_raw: Option<String>,
}

impl CookieSession {
    pub fn from_headers(headers: &HeaderMap, config: &AppConfig) -> Self {
        let mut cookies = parse_cookies(headers);
        Self {
            token: cookies.remove(&config.token_cookie),
            role_raw: cookies.remove(&config.role_cookie),
            user_raw: cookies.remove(&config.user_cookie),
        }
    }
}

impl SessionStore for CookieSession {
    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn role_record(&self) -> Option<RoleRecord> {
        self.role_raw.as_deref().and_then(RoleRecord::parse_lenient)
    }

    fn user_info(&self) -> Option<UserInfo> {
        self.user_raw.as_deref().and_then(UserInfo::parse_lenient)
    }
}

/// Lets handlers take the session snapshot as an argument.
impl<S> FromRequestParts<S> for CookieSession
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        Ok(CookieSession::from_headers(&parts.headers, &config))
    }
}

/// MemorySession
///
/// In-memory session store. Records are kept in their stored (raw) form so
/// corrupt values can be represented.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Option<String>,
    role_raw: Option<String>,
    user_raw: Option<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Stores a role record with the given code.
    pub fn with_role(self, code: impl Into<String>) -> Self {
        let record = RoleRecord::new(code);
        // Serializing a plain struct of strings cannot fail.
        let raw = serde_json::to_string(&record).unwrap_or_default();
        self.with_raw_role(raw)
    }

    /// Stores the role value verbatim, valid or not.
    pub fn with_raw_role(mut self, raw: impl Into<String>) -> Self {
        self.role_raw = Some(raw.into());
        self
    }

    pub fn with_user(mut self, user: &UserInfo) -> Self {
        self.user_raw = serde_json::to_string(user).ok();
        self
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn role_record(&self) -> Option<RoleRecord> {
        self.role_raw.as_deref().and_then(RoleRecord::parse_lenient)
    }

    fn user_info(&self) -> Option<UserInfo> {
        self.user_raw.as_deref().and_then(UserInfo::parse_lenient)
    }
}
