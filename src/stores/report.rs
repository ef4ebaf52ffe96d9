// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adherence and progress reports.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{ExerciseProgressReport, TrainingPlanReportItem};
use crate::time_utils::format_date;
use chrono::NaiveDate;

#[derive(Clone)]
pub struct ReportStore {
    api: ApiClient,
}

impl ReportStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// How closely each of the user's plans was followed between two dates.
    pub async fn get_plan_adherence(
        &self,
        user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TrainingPlanReportItem>> {
        let query = [
            ("user_id", user_id.to_string()),
            ("start_date", format_date(start)),
            ("end_date", format_date(end)),
        ];
        self.api
            .get_with_query("/reports/plan-adherence", &query)
            .await
    }

    /// Per-exercise progress within one plan between two dates.
    pub async fn get_exercise_progress(
        &self,
        plan_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExerciseProgressReport>> {
        let query = [
            ("start_date", format_date(start)),
            ("end_date", format_date(end)),
        ];
        self.api
            .get_with_query(&format!("/reports/exercise-progress/{}", plan_id), &query)
            .await
    }
}
