// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::{one_or_many, segment};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::TodayTraining;
use std::fmt::Display;

#[derive(Clone)]
pub struct HomeStore {
    api: ApiClient,
}

impl HomeStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Plans scheduled for today for a user. Empty on a rest day.
    pub async fn get_today_training(&self, user_id: impl Display) -> Result<Vec<TodayTraining>> {
        let body = self
            .api
            .get(&format!("/users/today_training/{}", segment(user_id)))
            .await?;
        one_or_many(body)
    }
}
