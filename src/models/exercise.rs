// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise catalogue model and its paginated listing.

use serde::{Deserialize, Serialize};

/// Page requested when the caller does not choose one.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size requested when the caller does not choose one.
pub const DEFAULT_LIMIT: u32 = 10;

/// An exercise from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    /// Category such as "strength" or "cardio"
    #[serde(rename = "type")]
    pub exercise_type: String,
}

/// Filter and pagination fields for the exercise listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub name: Option<String>,
    pub exercise_type: Option<String>,
}

impl ExerciseFilters {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn exercise_type(mut self, exercise_type: &str) -> Self {
        self.exercise_type = Some(exercise_type.to_string());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters for `GET /exercises/`.
    ///
    /// Page and limit are always sent; empty name/type filters are dropped.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.unwrap_or(DEFAULT_PAGE).to_string()),
            ("limit", self.limit.unwrap_or(DEFAULT_LIMIT).to_string()),
        ];
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            params.push(("name", name.to_string()));
        }
        if let Some(kind) = self.exercise_type.as_deref().filter(|t| !t.is_empty()) {
            params.push(("type", kind.to_string()));
        }
        params
    }
}

/// One page of exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedExercises {
    pub items: Vec<Exercise>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}
