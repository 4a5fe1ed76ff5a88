//! HTTP-level tests for the gateway contract.
//!
//! These verify header attachment, envelope parsing, and the error-message
//! extraction precedence against a local mock server.

#![allow(clippy::unwrap_used, clippy::panic)] // Test code

use holidaze_api::{ApiClient, ApiError, LoginRequest};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn venue_json(id: &str, name: &str, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "price": price,
        "maxGuests": 2,
    })
}

#[tokio::test]
async fn api_key_header_is_always_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidaze/venues"))
        .and(header("X-Noroff-API-Key", "test-key"))
        .and(query_param("limit", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [venue_json("v1", "Cabin", 100.0)],
            "meta": {"isLastPage": true, "currentPage": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    let page = client.list_venues(100, 1).await.unwrap();

    assert_eq!(page.data.len(), 1);

    // Public catalog calls carry no bearer credential.
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn bearer_header_is_attached_when_credential_supplied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidaze/profiles/alice/venues"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    let page = client.venues_by_profile("alice", "tok-123").await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn error_body_errors_array_takes_precedence() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"message": "Invalid email or password"}],
            "message": "outer message",
            "status": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    let request = LoginRequest {
        email: "guest@stud.noroff.no".to_string(),
        password: "wrong".to_string(),
    };

    let err = client.login(&request).await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidaze/venues/v1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    let err = client.get_venue_with_bookings("v1", None).await.unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "API request failed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn delete_with_empty_body_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/holidaze/bookings/b9"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    client.delete_booking("b9", "tok").await.unwrap();
}

#[tokio::test]
async fn venue_detail_parses_embedded_bookings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidaze/venues/v1"))
        .and(query_param("_bookings", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "v1",
                "name": "Cabin",
                "description": "By the lake",
                "price": 100.0,
                "maxGuests": 4,
                "bookings": [{
                    "id": "b1",
                    "dateFrom": "2026-09-01T00:00:00.000Z",
                    "dateTo": "2026-09-05T00:00:00.000Z",
                    "guests": 2,
                    "created": "2026-08-01T12:00:00.000Z",
                    "updated": "2026-08-01T12:00:00.000Z"
                }]
            },
            "meta": {}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), "test-key");
    let venue = client.get_venue_with_bookings("v1", None).await.unwrap().data;

    let bookings = venue.bookings.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].guests, 2);
}
