// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Value objects mirroring backend resources.

pub mod day;
pub mod exercise;
pub mod home;
pub mod report;
pub mod training_plan;
pub mod training_session;
pub mod user;

pub use day::{Day, Training};
pub use exercise::{Exercise, ExerciseFilters, PaginatedExercises};
pub use home::TodayTraining;
pub use report::{ExerciseExecutionStats, ExerciseProgressReport, TrainingPlanReportItem};
pub use training_plan::{PlanExercise, TrainingName, TrainingPlan, TrainingPlanUpdate};
pub use training_session::{
    Execution, ExecutionUpdate, SessionExecution, ThisWeekSession, TrainingSession,
    TrainingSessionSummary, TrainingSessionUpdate,
};
pub use user::{LoginResponse, RegisterRequest, User};
