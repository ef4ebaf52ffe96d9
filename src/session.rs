// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication session state.
//!
//! The session mirrors the persisted bearer token in memory and derives the
//! user id from the token payload. The payload is read without verifying
//! the signature; the backend remains the only trust boundary.

use crate::models::User;
use crate::navigation::{Location, Router, LOGIN};
use crate::token_cache::{CacheError, TokenCache};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde_json::Value;
use std::sync::{Arc, RwLock};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Claims read from a bearer token payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user id)
    pub sub: u64,
    /// Expiration time (Unix timestamp), if present
    pub exp: Option<i64>,
    /// Issued at (Unix timestamp), if present
    pub iat: Option<i64>,
}

/// Why a token payload yielded no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token does not have three segments")]
    Malformed,

    #[error("payload is not valid base64")]
    Base64,

    #[error("payload is not a JSON object")]
    Json,

    #[error("payload has no subject claim")]
    MissingSubject,

    #[error("subject claim is not numeric")]
    NonNumericSubject,
}

/// Parse the claims out of a `header.payload.signature` token.
pub fn decode_token(token: &str) -> Result<TokenClaims, TokenDecodeError> {
    let mut segments = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenDecodeError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenDecodeError::Malformed);
    }

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|_| TokenDecodeError::Base64)?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|_| TokenDecodeError::Json)?;
    let claims = value.as_object().ok_or(TokenDecodeError::Json)?;

    let sub = match claims.get("sub") {
        None | Some(Value::Null) => return Err(TokenDecodeError::MissingSubject),
        Some(Value::Number(n)) => n.as_u64().ok_or(TokenDecodeError::NonNumericSubject)?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| TokenDecodeError::NonNumericSubject)?,
        Some(_) => return Err(TokenDecodeError::NonNumericSubject),
    };

    Ok(TokenClaims {
        sub,
        exp: claims.get("exp").and_then(Value::as_i64),
        iat: claims.get("iat").and_then(Value::as_i64),
    })
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// In-memory session backed by the token cache.
pub struct Session {
    state: RwLock<SessionState>,
    tokens: Arc<dyn TokenCache>,
    router: Arc<Router>,
}

impl Session {
    /// Session picking up whatever token the cache already holds.
    pub fn restore(tokens: Arc<dyn TokenCache>, router: Arc<Router>) -> Self {
        let token = tokens.get();
        if token.is_some() {
            tracing::debug!("Restored session from token cache");
        }
        Self {
            state: RwLock::new(SessionState { token, user: None }),
            tokens,
            router,
        }
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn token(&self) -> Option<String> {
        self.read(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|s| s.token.is_some())
    }

    /// Profile of the logged-in user. Login does not fill this in.
    pub fn user(&self) -> Option<User> {
        self.read(|s| s.user.clone())
    }

    pub fn set_user(&self, user: Option<User>) {
        self.write(|s| s.user = user);
    }

    /// User id from the current token's `sub` claim.
    ///
    /// `None` when logged out or when the token payload cannot be read.
    pub fn user_id(&self) -> Option<u64> {
        let token = self.token()?;
        match decode_token(&token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                tracing::debug!(error = %e, "Token carries no usable identity");
                None
            }
        }
    }

    /// Start a session with a freshly issued token.
    ///
    /// An empty token leaves the session logged out, as the cache does.
    pub fn begin(&self, token: &str) -> Result<(), CacheError> {
        self.tokens.set(token)?;
        self.write(|s| s.token = (!token.is_empty()).then(|| token.to_string()));
        Ok(())
    }

    /// End the session and send the user to the login route.
    ///
    /// Safe to call when already logged out.
    pub fn end(&self) {
        self.write(|s| {
            s.token = None;
            s.user = None;
        });

        if let Err(e) = self.tokens.clear() {
            tracing::warn!(error = %e, "Failed to clear token cache");
        }

        if let Err(e) = self.router.push(Location::name(LOGIN)) {
            tracing::warn!(error = %e, "Failed to navigate to login");
        }
    }

    fn read<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        f(&state)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        f(&mut state);
    }
}
