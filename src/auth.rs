// src/auth.rs
//
// Login, session check and logout against the upstream site.
// The session is nothing more than the cookie value handed out on login.

use serde::{Deserialize, Serialize};

use crate::config::consts::{AUTH_PATH, SESSION_COOKIE, USER_PATH};
use crate::core::net::{self, Client};
use crate::error::NetError;

/// Validated login input. Both fields non-empty; the username is trimmed.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Result<Self, NetError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(NetError::InvalidCredentials);
        }
        Ok(Self { username: s!(username), password: s!(password) })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    value: String,
}

impl Session {
    pub fn new(value: impl Into<String>) -> Result<Self, NetError> {
        let value = value.into();
        if value.is_empty() {
            return Err(NetError::NotAuthenticated);
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `DHV_XC_SESSION=<value>`
    pub fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.value)
    }
}

/// Session value out of a raw `Set-Cookie` header: the part before the
/// first `;`, minus the cookie name. `=` inside the value is preserved.
pub fn session_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?;
    let mut parts = pair.split('=');
    parts.next()?;
    let value = parts.collect::<Vec<_>>().join("=");
    let value = value.trim();
    (!value.is_empty()).then(|| s!(value))
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    user: &'a str,
    pass: &'a str,
}

#[derive(Deserialize, Default)]
struct AuthReply {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct UserReply {
    #[serde(default)]
    username: Option<String>,
}

pub fn login(client: &Client, creds: &Credentials) -> Result<Session, NetError> {
    logf!("Auth: Login as {}", creds.username);

    let resp = client.post_json(
        AUTH_PATH,
        &AuthRequest { user: &creds.username, pass: &creds.password },
    )?;
    let status = resp.status();
    let set_cookie = net::first_set_cookie(&resp);
    let body = resp.text()?;

    if !status.is_success() {
        let reply: AuthReply = serde_json::from_str(&body).unwrap_or_default();
        let msg = reply.error.unwrap_or_else(|| s!("Authentication failed"));
        logw!("Auth: Rejected ({status}): {msg}");
        return Err(NetError::AuthFailed(msg));
    }

    let reply: AuthReply =
        serde_json::from_str(&body).map_err(|e| NetError::Decode(e.to_string()))?;
    if let Some(msg) = reply.error {
        logw!("Auth: Rejected: {msg}");
        return Err(NetError::AuthFailed(msg));
    }

    let value = set_cookie
        .as_deref()
        .and_then(session_from_set_cookie)
        .ok_or(NetError::NoSessionCookie)?;

    logf!("Auth: Session established");
    Session::new(value)
}

/// Ask the site who we are. Any non-2xx means the cookie is no good.
pub fn check(client: &Client, session: &Session) -> Result<String, NetError> {
    let resp = client.get_with_session(USER_PATH, session)?;
    if !resp.status().is_success() {
        logd!("Auth: Check failed ({})", resp.status());
        return Err(NetError::SessionInvalid);
    }
    let body = resp.text()?;
    let reply: UserReply =
        serde_json::from_str(&body).map_err(|e| NetError::Decode(e.to_string()))?;
    Ok(reply.username.unwrap_or_default())
}

/// Forget the session. Nothing is sent upstream.
pub fn logout(_session: Session) {
    logf!("Auth: Logged out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_is_taken_from_first_pair() {
        assert_eq!(
            session_from_set_cookie("DHV_XC_SESSION=abc123; Path=/; HttpOnly"),
            Some(s!("abc123"))
        );
        assert_eq!(session_from_set_cookie("S=a=b=c; Secure"), Some(s!("a=b=c")));
        assert_eq!(session_from_set_cookie("S=; Path=/"), None);
        assert_eq!(session_from_set_cookie("garbage"), None);
    }

    #[test]
    fn credentials_must_be_present() {
        assert!(matches!(Credentials::new("", "pw"), Err(NetError::InvalidCredentials)));
        assert!(matches!(Credentials::new("   ", "pw"), Err(NetError::InvalidCredentials)));
        assert!(matches!(Credentials::new("pilot", ""), Err(NetError::InvalidCredentials)));
        let c = Credentials::new("  pilot ", "pw").unwrap();
        assert_eq!(c.username(), "pilot");
        assert!(!format!("{c:?}").contains("pw\""));
    }

    #[test]
    fn session_header_uses_cookie_name() {
        let s = Session::new("xyz").unwrap();
        assert_eq!(s.cookie_header(), "DHV_XC_SESSION=xyz");
        assert!(matches!(Session::new(""), Err(NetError::NotAuthenticated)));
    }
}
