//! Backend client behavior against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kino_model::{Decision, FilmId};
use kino_player::infrastructure::services::{AuthService, FilmService};
use kino_player::infrastructure::{ApiClient, ApiError};

fn film_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "posterPath": "/poster.jpg",
        "genres": [{ "id": 18, "name": "Drama" }],
        "voteAverage": 7.5,
        "releaseDate": "2010-07-16",
    })
}

#[tokio::test]
async fn bearer_token_is_attached_once_installed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/next"))
        .and(header("Authorization", "Bearer t0k3n"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([film_json(603, "The Matrix")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    api.set_token(Some("t0k3n".to_string()));

    let films = FilmService::new(api).next_batch().await.unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].id, FilmId(603));
    assert_eq!(films[0].title, "The Matrix");
    assert_eq!(films[0].genres[0].name, "Drama");
}

#[tokio::test]
async fn unauthorized_response_clears_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/popular"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    api.set_token(Some("stale".to_string()));

    let result = FilmService::new(api.clone()).popular().await;
    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    assert!(!api.has_token());
}

#[tokio::test]
async fn server_error_body_becomes_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/films/recommendations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("recommender offline"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let result = FilmService::new(api).recommendations().await;
    match result.unwrap_err() {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "recommender offline");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn interactions_post_to_the_decision_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/interaction/like/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/interaction/superlike/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let films = FilmService::new(ApiClient::new(server.uri()));
    films
        .record_interaction(FilmId(42), Decision::Like)
        .await
        .unwrap();
    films
        .record_interaction(FilmId(42), Decision::Superlike)
        .await
        .unwrap();
}

#[tokio::test]
async fn login_installs_the_session_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "name": "ada", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fresh" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/films/next"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let auth = AuthService::new(api.clone());

    let response = auth.login("ada", "hunter2").await.unwrap();
    assert_eq!(response.token, "fresh");
    assert!(api.has_token());

    // The freshly installed token rides along on the next call.
    FilmService::new(api.clone()).next_batch().await.unwrap();

    auth.logout();
    assert!(!api.has_token());
}

#[tokio::test]
async fn login_failure_surfaces_the_backend_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let result = AuthService::new(api.clone()).login("ada", "wrong").await;
    match result.unwrap_err() {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(!api.has_token());
}
