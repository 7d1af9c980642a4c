//! HTTP routes.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod story;

/// Builds the full application router.
///
/// `/health` is matched first; every other path falls through to the
/// story, so a chapter keyed `health` is shadowed.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(story::router())
        .with_state(state)
}
