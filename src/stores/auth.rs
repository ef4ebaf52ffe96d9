// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and logout.

use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{LoginResponse, RegisterRequest};
use crate::navigation::{Location, HOME, LOGIN};
use crate::session::Session;
use std::sync::Arc;

/// Session lifecycle operations.
#[derive(Clone)]
pub struct AuthStore {
    api: ApiClient,
    session: Arc<Session>,
}

impl AuthStore {
    pub fn new(api: ApiClient, session: Arc<Session>) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Exchange credentials for a bearer token and go to the home route.
    ///
    /// On failure nothing is stored and no navigation happens.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let form = [("username", email), ("password", password)];
        let response: LoginResponse = self.api.post_form("/auth/login", &form).await?;
        if response.access_token.is_empty() {
            return Err(ClientError::Decode(
                "login response has an empty access_token".to_string(),
            ));
        }

        self.session.begin(&response.access_token)?;
        tracing::info!(user_id = ?self.session.user_id(), "Logged in");

        self.session.router().push(Location::name(HOME))?;
        Ok(())
    }

    /// Create an account, then go to the login route. Does not log in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        self.api.post_json_unit("/auth/register", &body).await?;
        tracing::info!("Account registered");

        self.session.router().push(Location::name(LOGIN))?;
        Ok(())
    }

    /// Drop the session. Idempotent.
    pub fn logout(&self) {
        self.session.end();
        tracing::info!("Logged out");
    }
}
