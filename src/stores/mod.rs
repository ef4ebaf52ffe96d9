// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stores: one per backend resource, each a thin set of async calls over
//! the shared [`ApiClient`](crate::client::ApiClient).

pub mod auth;
pub mod day;
pub mod exercise;
pub mod home;
pub mod report;
pub mod training;
pub mod training_plan;
pub mod training_session;

pub use auth::AuthStore;
pub use day::DayStore;
pub use exercise::ExerciseStore;
pub use home::HomeStore;
pub use report::ReportStore;
pub use training::TrainingStore;
pub use training_plan::TrainingPlanStore;
pub use training_session::TrainingSessionStore;

use crate::error::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

/// Percent-encode an id for use as a path segment.
pub(crate) fn segment(id: impl Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

/// Decode a body that may be a list, a single object, or `null`.
pub(crate) fn one_or_many<T: DeserializeOwned>(body: Value) -> Result<Vec<T>> {
    let decoded = match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(body),
        single => serde_json::from_value(single).map(|item| vec![item]),
    };
    decoded.map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodayTraining;
    use serde_json::json;

    fn today(id: u64) -> Value {
        json!({"id": id, "user_id": 1, "training_name": "Legs", "day_name": "Monday"})
    }

    #[test]
    fn test_one_or_many_shapes() {
        let many: Vec<TodayTraining> = one_or_many(json!([today(1), today(2)])).unwrap();
        assert_eq!(many.len(), 2);

        let one: Vec<TodayTraining> = one_or_many(today(3)).unwrap();
        assert_eq!(one[0].id, 3);

        let none: Vec<TodayTraining> = one_or_many(Value::Null).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_one_or_many_rejects_wrong_shape() {
        let err = one_or_many::<TodayTraining>(json!("rest day")).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_segment_encodes() {
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
        assert_eq!(segment(42), "42");
    }
}
