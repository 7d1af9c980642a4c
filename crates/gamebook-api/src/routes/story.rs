//! Catch-all route serving story chapters.

use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;

use crate::state::AppState;

/// Any method, any path not claimed by another route.
async fn serve_chapter(State(state): State<AppState>, request: Request) -> Response {
    state.story_handler.dispatch(&request)
}

/// Returns the story router.
pub fn router() -> Router<AppState> {
    Router::new().fallback(serve_chapter)
}
