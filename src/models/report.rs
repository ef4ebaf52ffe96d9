// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adherence and progress report rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-plan adherence over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlanReportItem {
    pub training_plan_id: u64,
    pub training_id: u64,
    pub day_id: u64,
    /// Sessions expected in the range
    pub planned_total: u32,
    pub done_right_day: u32,
    /// Done before the planned weekday
    pub done_early: u32,
    pub done_wrong_day: u32,
    pub not_done: u32,
}

/// Aggregated figures for one execution of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseExecutionStats {
    pub sets_done: Option<f64>,
    /// Weighted average across sets
    pub reps: Option<f64>,
    /// Weighted average load
    pub weight: Option<f64>,
    pub performed_date: NaiveDate,
}

/// Progress of one exercise within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgressReport {
    pub exercise_id: u64,
    pub exercise_name: String,
    pub exercise_type: String,
    pub times_performed: u32,
    pub times_skipped: u32,
    pub first_execution: Option<ExerciseExecutionStats>,
    pub best_execution: Option<ExerciseExecutionStats>,
    pub last_execution: Option<ExerciseExecutionStats>,
    pub improvement_summary: Option<String>,
    pub improvement_percentage: Option<f64>,
}
