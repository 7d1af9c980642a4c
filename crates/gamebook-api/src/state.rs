//! Shared application state.

use crate::handler::StoryHandler;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Serves the story's chapters.
    pub story_handler: StoryHandler,
    /// SHA-256 of the serialized story being served.
    pub story_digest: String,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(story_handler: StoryHandler, story_digest: String) -> Self {
        Self {
            story_handler,
            story_digest,
        }
    }
}
