// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday and training catalogue entries.

use serde::{Deserialize, Serialize};

/// A day a training plan can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: u64,
    pub name: String,
}

/// A named training (e.g. "Upper body A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub id: u64,
    pub name: String,
}
