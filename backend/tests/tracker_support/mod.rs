//! Shared harness for exercise tracker integration tests.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{Error, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::server::{ServerConfig, build_app, build_http_state};

/// Clock pinned to 2024-05-17 08:15 UTC.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 8, 15, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// Wire rendering of [`FixtureClock`]'s date.
pub const FIXTURE_TODAY: &str = "Fri May 17 2024";

/// Initialise the full application over fresh in-memory stores.
pub async fn tracker_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    let health = web::Data::new(HealthState::new());
    let config =
        ServerConfig::new(([127, 0, 0, 1], 0).into()).with_clock(Arc::new(FixtureClock));
    let state = build_http_state(&config);
    actix_test::init_service(build_app(health, state)).await
}

/// Send `request` and return the status with the decoded text body.
pub async fn send<S>(app: &S, request: TestRequest) -> (u16, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let bytes = actix_test::read_body(response).await;
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

/// Send `request` and decode a JSON body, asserting the expected status.
pub async fn send_json<S>(app: &S, request: TestRequest, expected_status: u16) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let (status, body) = send(app, request).await;
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    serde_json::from_str(&body).expect("JSON body")
}

/// Register `username` and return the generated id.
pub async fn create_user<S>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let body = send_json(
        app,
        TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "username": username })),
        201,
    )
    .await;
    body["id"].as_str().expect("id is a string").to_owned()
}

/// Record an exercise through the JSON API.
pub async fn add_exercise<S>(app: &S, user_id: &str, description: &str, date: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    send_json(
        app,
        TestRequest::post().uri("/exercises").set_json(serde_json::json!({
            "userId": user_id,
            "description": description,
            "duration": 20,
            "date": date,
        })),
        200,
    )
    .await
}
