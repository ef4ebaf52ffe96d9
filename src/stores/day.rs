// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Day;

#[derive(Clone)]
pub struct DayStore {
    api: ApiClient,
}

impl DayStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All days a plan can be scheduled on.
    pub async fn get_days(&self) -> Result<Vec<Day>> {
        self.api.get("/days/").await
    }
}
