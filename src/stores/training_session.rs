// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training sessions and their execution records.

use super::segment;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::training_session::FirstDateResponse;
use crate::models::{
    SessionExecution, ThisWeekSession, TrainingSession, TrainingSessionSummary,
    TrainingSessionUpdate,
};
use crate::time_utils::{find_in_week, today_local};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Display;

#[derive(Clone)]
pub struct TrainingSessionStore {
    api: ApiClient,
}

impl TrainingSessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Record a session together with its executions.
    pub async fn create_training_session(&self, session: &TrainingSession) -> Result<()> {
        self.api
            .post_json_unit("/training_sessions/with_executions", session)
            .await
    }

    /// The backend's own view of this week's session for a plan.
    pub async fn get_training_session_this_week(&self, plan_id: impl Display) -> Result<Value> {
        let path = format!("/training_sessions/this_week/{}", segment(plan_id));
        self.api.get(&path).await
    }

    /// Whether the plan already has a session in the current local week.
    pub async fn get_this_week_session(&self, plan_id: u64) -> Result<ThisWeekSession> {
        self.get_this_week_session_on(plan_id, today_local()).await
    }

    /// Same as [`get_this_week_session`](Self::get_this_week_session) with
    /// an explicit "today".
    pub async fn get_this_week_session_on(
        &self,
        plan_id: u64,
        today: NaiveDate,
    ) -> Result<ThisWeekSession> {
        let sessions = self.get_sessions_for_plan(plan_id).await?;
        let found = find_in_week(&sessions, today);
        tracing::debug!(plan_id, ?found, sessions = sessions.len(), "Checked current week");
        Ok(ThisWeekSession::from_session_id(found))
    }

    pub async fn get_executions_for_session(
        &self,
        session_id: u64,
    ) -> Result<Vec<SessionExecution>> {
        self.api
            .get(&format!("/training_executions/{}", session_id))
            .await
    }

    pub async fn get_sessions_for_plan(&self, plan_id: u64) -> Result<Vec<TrainingSessionSummary>> {
        self.api
            .get(&format!("/training_sessions/{}", plan_id))
            .await
    }

    pub async fn update_training_session(
        &self,
        session_id: u64,
        update: &TrainingSessionUpdate,
    ) -> Result<Value> {
        self.api
            .put_json(&format!("/training_sessions/{}", session_id), update)
            .await
    }

    /// Date of the plan's first recorded session, if any.
    pub async fn get_first_date(&self, plan_id: impl Display) -> Result<Option<NaiveDate>> {
        let path = format!("/training_sessions/first_date/{}", segment(plan_id));
        let response: FirstDateResponse = self.api.get(&path).await?;
        Ok(response.first_date)
    }
}
