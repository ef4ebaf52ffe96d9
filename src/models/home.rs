// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home screen model.

use serde::{Deserialize, Serialize};

/// Plan scheduled for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayTraining {
    pub id: u64,
    pub user_id: u64,
    pub training_name: String,
    pub day_name: String,
}
