// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use training_tracker::config::Config;
use training_tracker::token_cache::{MemoryTokenCache, TokenCache};
use training_tracker::App;
use wiremock::MockServer;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

/// Create a signed bearer token for a user, as the backend would issue.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + 60 * 60,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"backend_signing_key_for_tests!!"),
    )
    .expect("Failed to create JWT")
}

/// Config pointing at a mock backend.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config::with_api_url(&server.uri()).expect("mock server URI is valid")
}

/// App around a caller-provided token cache.
#[allow(dead_code)]
pub fn create_test_app_with_cache(server: &MockServer, tokens: Arc<dyn TokenCache>) -> App {
    App::with_token_cache(test_config(server), tokens).expect("Failed to build app")
}

/// Logged-out app with an in-memory token cache.
#[allow(dead_code)]
pub fn create_test_app(server: &MockServer) -> (App, Arc<MemoryTokenCache>) {
    let tokens = Arc::new(MemoryTokenCache::new());
    (create_test_app_with_cache(server, tokens.clone()), tokens)
}

/// App restored from a cache that already holds `token`.
#[allow(dead_code)]
pub fn create_logged_in_app(server: &MockServer, token: &str) -> (App, Arc<MemoryTokenCache>) {
    let tokens = Arc::new(MemoryTokenCache::with_token(token));
    (create_test_app_with_cache(server, tokens.clone()), tokens)
}
