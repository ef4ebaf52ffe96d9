// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{ExerciseFilters, PaginatedExercises};

#[derive(Clone)]
pub struct ExerciseStore {
    api: ApiClient,
}

impl ExerciseStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One page of the exercise catalogue.
    ///
    /// Defaults to page 1 with 10 items; name and type filters are only
    /// sent when non-empty.
    pub async fn get_exercises(&self, filters: &ExerciseFilters) -> Result<PaginatedExercises> {
        self.api
            .get_with_query("/exercises/", &filters.query_pairs())
            .await
    }
}
