// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response interceptor behaviour shared by every store.
//!
//! These tests verify that:
//! 1. The bearer token is attached from the cache on every request
//! 2. A 401 from any store ends the session and lands on the login route
//! 3. Other failures propagate untouched

use serde_json::json;
use training_tracker::error::ClientError;
use training_tracker::models::{ExerciseFilters, TrainingPlan};
use training_tracker::navigation::LOGIN;
use training_tracker::token_cache::TokenCache;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn mount_401(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(server)
        .await;
}

fn assert_logged_out(app: &training_tracker::App, tokens: &dyn TokenCache) {
    assert!(tokens.get().is_none(), "token cache should be empty");
    assert!(app.api.authorization_header().is_none());
    assert!(app.session.token().is_none());
    assert_eq!(app.router.current_name().as_deref(), Some(LOGIN));
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let server = MockServer::start().await;
    let token = common::create_test_jwt(8);

    Mock::given(method("GET"))
        .and(path("/days/"))
        .and(bearer_token(token.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Monday"},
            {"id": 2, "name": "Tuesday"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (app, _) = common::create_logged_in_app(&server, &token);
    let days = app.days.get_days().await.unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].name, "Monday");
}

#[tokio::test]
async fn test_401_from_day_store_ends_session() {
    let server = MockServer::start().await;
    mount_401(&server, "GET", "/days/").await;

    let (app, tokens) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app.days.get_days().await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized));
    assert_logged_out(&app, tokens.as_ref());
}

#[tokio::test]
async fn test_401_from_exercise_store_ends_session() {
    let server = MockServer::start().await;
    mount_401(&server, "GET", "/exercises/").await;

    let (app, tokens) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app
        .exercises
        .get_exercises(&ExerciseFilters::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_logged_out(&app, tokens.as_ref());
}

#[tokio::test]
async fn test_401_from_training_plan_create_ends_session() {
    let server = MockServer::start().await;
    mount_401(&server, "POST", "/training_plans/").await;

    let (app, tokens) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app
        .training_plans
        .create_training_plan(&TrainingPlan::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_logged_out(&app, tokens.as_ref());
}

#[tokio::test]
async fn test_401_from_session_store_ends_session() {
    let server = MockServer::start().await;
    mount_401(&server, "GET", "/training_sessions/4").await;

    let (app, tokens) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app.training_sessions.get_this_week_session(4).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_logged_out(&app, tokens.as_ref());
}

#[tokio::test]
async fn test_server_error_keeps_session() {
    let server = MockServer::start().await;
    let token = common::create_test_jwt(1);

    Mock::given(method("GET"))
        .and(path("/trainings/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let (app, tokens) = common::create_logged_in_app(&server, &token);
    let err = app.trainings.get_trainings().await.unwrap_err();

    match err {
        ClientError::Http { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(tokens.get().as_deref(), Some(token.as_str()));
    assert!(app.router.history().is_empty());
}

#[tokio::test]
async fn test_forbidden_is_not_treated_as_logout() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/training_plans/3"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let (app, tokens) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app.training_plans.delete_training_plan(3).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
    assert!(tokens.get().is_some());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/days/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (app, _) = common::create_logged_in_app(&server, &common::create_test_jwt(1));
    let err = app.days.get_days().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}
