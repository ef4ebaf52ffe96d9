// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the training backend.
//!
//! Handles:
//! - Joining resource paths onto the configured base URL
//! - Attaching the current bearer token to every request
//! - Session teardown when the backend rejects an authenticated request
//!
//! The token is read from the token cache when each request is built, so
//! the header sent always matches what the cache holds.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::token_cache::TokenCache;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Callback run after a 401 has cleared the token cache.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Training backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenCache>,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    /// Create a client for the backend named in `config`.
    pub fn new(
        config: &Config,
        tokens: Arc<dyn TokenCache>,
        on_unauthorized: UnauthorizedHook,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
            tokens,
            on_unauthorized,
        })
    }

    /// Value of the `Authorization` header the next request will carry.
    pub fn authorization_header(&self) -> Option<String> {
        self.tokens.get().map(|token| format!("Bearer {}", token))
    }

    /// Absolute URL for a resource path.
    pub fn url(&self, path: &str) -> Result<reqwest::Url> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        reqwest::Url::parse(&joined)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    // ─── Verbs ───────────────────────────────────────────────────────────────

    /// GET a resource and decode its JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path)?;
        self.send_json(request).await
    }

    /// GET with query parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(query);
        self.send_json(request).await
    }

    /// POST a JSON body, ignoring whatever the backend returns.
    pub async fn post_json_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await.map(drop)
    }

    /// POST a form-encoded body and decode the JSON response.
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.form(form);
        self.send_json(request).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send_json(request).await
    }

    /// PUT a JSON body, ignoring whatever the backend returns.
    pub async fn put_json_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send(request).await.map(drop)
    }

    /// DELETE a resource.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path)?;
        self.send(request).await.map(drop)
    }

    // ─── Plumbing ────────────────────────────────────────────────────────────

    fn request(&self, method: Method, path: &str) -> Result<Pending> {
        let url = self.url(path)?;
        let token = self.tokens.get();
        tracing::debug!(
            method = %method,
            path,
            authenticated = token.is_some(),
            "Dispatching request"
        );

        let mut builder = self.http.request(method, url);
        if let Some(token) = &token {
            builder = builder.bearer_auth(token);
        }
        Ok(Pending {
            builder,
            authenticated: token.is_some(),
        })
    }

    async fn send(&self, request: Pending) -> Result<Response> {
        let response = request.builder.send().await?;
        self.check_response(response, request.authenticated).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Pending) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;

        // Some endpoints answer 200 with an empty body.
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes[..]
        };

        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Response interceptor.
    ///
    /// Successful responses pass through. A 401 clears the token cache and,
    /// if the request carried a token, runs the unauthorized hook before the
    /// failure reaches the caller. A 401 on an anonymous request (a rejected
    /// login) has no session to end, so the hook is skipped. No retry is
    /// attempted. Other failures are returned as-is.
    async fn check_response(&self, response: Response, authenticated: bool) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.tokens.clear() {
                tracing::warn!(error = %e, "Failed to clear token cache");
            }
            if authenticated {
                tracing::warn!(
                    path = response.url().path(),
                    "Backend answered 401, ending session"
                );
                (self.on_unauthorized)();
            } else {
                tracing::debug!(path = response.url().path(), "Anonymous request rejected (401)");
            }
            return Err(ClientError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = %status, "Request failed");
        Err(ClientError::Http { status, body })
    }
}

/// A built request plus whether it carries a bearer token.
struct Pending {
    builder: RequestBuilder,
    authenticated: bool,
}

impl Pending {
    fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    fn form<F: Serialize + ?Sized>(mut self, form: &F) -> Self {
        self.builder = self.builder.form(form);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_cache::MemoryTokenCache;

    fn client(api_url: &str, tokens: Arc<dyn TokenCache>) -> ApiClient {
        let config = Config::with_api_url(api_url).unwrap();
        ApiClient::new(&config, tokens, Arc::new(|| {})).unwrap()
    }

    #[test]
    fn test_url_keeps_base_path() {
        let c = client("http://api.test/v1/", Arc::new(MemoryTokenCache::new()));
        assert_eq!(c.url("/days/").unwrap().as_str(), "http://api.test/v1/days/");
        assert_eq!(c.url("days/").unwrap().as_str(), "http://api.test/v1/days/");
    }

    #[test]
    fn test_authorization_header_follows_cache() {
        let tokens = Arc::new(MemoryTokenCache::new());
        let c = client("http://api.test", tokens.clone());
        assert!(c.authorization_header().is_none());

        tokens.set("abc").unwrap();
        assert_eq!(c.authorization_header().as_deref(), Some("Bearer abc"));

        tokens.clear().unwrap();
        assert!(c.authorization_header().is_none());
    }
}
