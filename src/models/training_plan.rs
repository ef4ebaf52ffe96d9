// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan models.

use serde::{Deserialize, Serialize};

/// Plan summary as listed for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingName {
    pub id: u64,
    pub user_id: u64,
    pub training_name: String,
    pub day_name: String,
}

/// Reference to a catalogue exercise inside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub exercise_id: u64,
}

/// Body of `POST /training_plans/`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<PlanExercise>>,
}

/// Body of `PUT /training_plans/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<PlanExercise>>,
}
