//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gamebook_story::{Story, story_digest};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gamebook_api::handler::{HandlerOption, StoryHandler};
use gamebook_api::routes;
use gamebook_api::state::AppState;

/// Path of a story shipped in `stories/`.
pub fn story_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("stories")
        .join(file_name)
}

/// Loads a story shipped in `stories/`.
pub fn load_story(file_name: &str) -> Story {
    Story::from_file(&story_path(file_name)).unwrap()
}

/// Build the full app router for `story` with the given handler options.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(story: Story, options: Vec<HandlerOption>) -> Router {
    let handler = StoryHandler::new(story, options);
    routes::app(AppState::new(handler, story_digest(b"test")))
}

/// Build the app serving `stories/lighthouse.json`, reporting the file's
/// real digest.
pub fn build_lighthouse_app(options: Vec<HandlerOption>) -> Router {
    let path = story_path("lighthouse.json");
    let bytes = std::fs::read(&path).unwrap();
    let handler = StoryHandler::new(Story::from_file(&path).unwrap(), options);
    routes::app(AppState::new(handler, story_digest(&bytes)))
}

/// Send a GET request and return status, content type and body text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get_text(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
