// src/core/net.rs
// Blocking HTTP against the upstream site. Knows URLs, headers and the
// session cookie; knows nothing about flights.

use std::time::Duration;

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{COOKIE, SET_COOKIE};
use serde::Serialize;

use crate::auth::Session;
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::NetError;

pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, NetError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, base_url: s!(base_url.trim_end_matches('/')) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body without a session.
    pub fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, NetError> {
        let url = self.url(path);
        logd!("Net: POST {url}");
        Ok(self.http.post(&url).json(body).send()?)
    }

    /// GET with the session cookie attached.
    pub fn get_with_session(&self, path: &str, session: &Session) -> Result<Response, NetError> {
        let url = self.url(path);
        logd!("Net: GET {url}");
        Ok(self
            .http
            .get(&url)
            .header(COOKIE, session.cookie_header())
            .send()?)
    }
}

/// First `Set-Cookie` header of a response, if it is readable text.
pub fn first_set_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
