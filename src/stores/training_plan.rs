// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan CRUD.

use super::{one_or_many, segment};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{TrainingName, TrainingPlan, TrainingPlanUpdate};
use serde_json::Value;
use std::fmt::Display;

#[derive(Clone)]
pub struct TrainingPlanStore {
    api: ApiClient,
}

impl TrainingPlanStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The user's plans scheduled for today. The backend may answer with a
    /// list, a single plan, or nothing at all.
    pub async fn get_today_training(&self, user_id: impl Display) -> Result<Vec<TrainingName>> {
        let path = format!("/training_plans/user_trainings/today/{}", segment(user_id));
        one_or_many(self.api.get(&path).await?)
    }

    pub async fn create_training_plan(&self, plan: &TrainingPlan) -> Result<()> {
        self.api.post_json_unit("/training_plans/", plan).await
    }

    /// All plans of a user, by name.
    pub async fn get_training_plans(&self, user_id: impl Display) -> Result<Vec<TrainingName>> {
        let path = format!("/training_plans/user_trainings/name/{}", segment(user_id));
        self.api.get(&path).await
    }

    /// Exercises of a plan. The shape is owned by the backend and passed
    /// through untouched.
    pub async fn get_training_plan_exercises(&self, plan_id: impl Display) -> Result<Value> {
        self.api
            .get(&format!("/training_plans/{}", segment(plan_id)))
            .await
    }

    pub async fn update_training_plan(
        &self,
        plan_id: impl Display,
        update: &TrainingPlanUpdate,
    ) -> Result<()> {
        self.api
            .put_json_unit(&format!("/training_plans/{}", segment(plan_id)), update)
            .await
    }

    pub async fn delete_training_plan(&self, plan_id: impl Display) -> Result<()> {
        self.api
            .delete(&format!("/training_plans/{}", segment(plan_id)))
            .await
    }
}
