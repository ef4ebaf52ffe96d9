// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session and execution record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-exercise result submitted with a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_plan_exercise_id: Option<u64>,
    pub sets_done: u32,
    pub reps: u32,
    /// Load in kilograms
    pub weight: f64,
}

/// Body of `POST /training_sessions/with_executions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_plan_id: Option<u64>,
    pub performed_date: NaiveDate,
    pub executions: Vec<Execution>,
}

/// Session as listed for a plan. Extra backend fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSessionSummary {
    pub id: u64,
    pub performed_date: NaiveDate,
}

/// Stored execution record of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExecution {
    pub id: u64,
    pub training_session_id: u64,
    pub training_plan_exercise_id: u64,
    pub sets_done: u32,
    pub reps: u32,
    pub weight: f64,
}

/// Partial execution update; unset fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionUpdate {
    pub training_plan_exercise_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets_done: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Body of `PUT /training_sessions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingSessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executions: Option<Vec<ExecutionUpdate>>,
}

/// Whether the current week already has a session for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThisWeekSession {
    pub exists: bool,
    pub session_id: Option<u64>,
}

impl ThisWeekSession {
    pub fn from_session_id(session_id: Option<u64>) -> Self {
        Self {
            exists: session_id.is_some(),
            session_id,
        }
    }
}

/// Response of `GET /training_sessions/first_date/{plan_id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FirstDateResponse {
    #[serde(default)]
    pub first_date: Option<NaiveDate>,
}
