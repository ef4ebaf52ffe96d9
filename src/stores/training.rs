// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Training;

#[derive(Clone)]
pub struct TrainingStore {
    api: ApiClient,
}

impl TrainingStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_trainings(&self) -> Result<Vec<Training>> {
        self.api.get("/trainings/").await
    }
}
