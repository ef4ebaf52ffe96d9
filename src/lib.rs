// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training Tracker: client for the training-plan backend
//!
//! This crate authenticates users, manages training plans and sessions,
//! and fetches adherence/progress reports. All business logic lives in the
//! backend; the client keeps only the session token and the current route.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod stores;
pub mod time_utils;
pub mod token_cache;

use client::ApiClient;
use config::Config;
use navigation::Router;
use session::Session;
use std::sync::Arc;
use stores::{
    AuthStore, DayStore, ExerciseStore, HomeStore, ReportStore, TrainingPlanStore,
    TrainingSessionStore, TrainingStore,
};
use token_cache::{FileTokenCache, TokenCache};

/// Shared application state.
pub struct App {
    pub config: Config,
    pub tokens: Arc<dyn TokenCache>,
    pub router: Arc<Router>,
    pub session: Arc<Session>,
    pub api: ApiClient,
    pub auth: AuthStore,
    pub days: DayStore,
    pub exercises: ExerciseStore,
    pub home: HomeStore,
    pub reports: ReportStore,
    pub trainings: TrainingStore,
    pub training_plans: TrainingPlanStore,
    pub training_sessions: TrainingSessionStore,
}

impl App {
    /// Build the app with the durable token cache named in `config`.
    pub fn new(config: Config) -> error::Result<Self> {
        let tokens = Arc::new(FileTokenCache::new(config.token_cache_path.clone()));
        Self::with_token_cache(config, tokens)
    }

    /// Build the app around an existing token cache.
    ///
    /// A 401 on any authenticated request ends the session through the one
    /// hook installed here.
    pub fn with_token_cache(config: Config, tokens: Arc<dyn TokenCache>) -> error::Result<Self> {
        let router = Arc::new(Router::with_default_routes(tokens.clone()));
        let session = Arc::new(Session::restore(tokens.clone(), router.clone()));

        let hook_session = session.clone();
        let api = ApiClient::new(&config, tokens.clone(), Arc::new(move || hook_session.end()))?;

        Ok(Self {
            auth: AuthStore::new(api.clone(), session.clone()),
            days: DayStore::new(api.clone()),
            exercises: ExerciseStore::new(api.clone()),
            home: HomeStore::new(api.clone()),
            reports: ReportStore::new(api.clone()),
            trainings: TrainingStore::new(api.clone()),
            training_plans: TrainingPlanStore::new(api.clone()),
            training_sessions: TrainingSessionStore::new(api.clone()),
            config,
            tokens,
            router,
            session,
            api,
        })
    }
}
