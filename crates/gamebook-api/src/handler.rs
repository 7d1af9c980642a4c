//! The story dispatch handler.
//!
//! Each request goes through one step: derive a key, look the chapter up,
//! render it. Nothing is kept between requests; the handler and its story
//! are read-only after construction and shared freely across workers.

use std::fmt;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use gamebook_render::{ChapterTemplate, HtmlTemplate};
use gamebook_story::Story;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::error::DispatchError;
use crate::keys::{KeyDeriver, PathKey};

/// A construction-time override for a `StoryHandler`.
///
/// Options are applied in the order given; a later option replaces an
/// earlier one of the same kind.
#[derive(Clone)]
pub enum HandlerOption {
    /// Replaces the render template.
    Template(Arc<dyn ChapterTemplate>),
    /// Replaces the key derivation policy.
    KeyDerivation(Arc<dyn KeyDeriver>),
}

impl fmt::Debug for HandlerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(_) => f.write_str("HandlerOption::Template(..)"),
            Self::KeyDerivation(_) => f.write_str("HandlerOption::KeyDerivation(..)"),
        }
    }
}

/// Renders chapters with `template` instead of the built-in HTML page.
pub fn with_template(template: impl ChapterTemplate + 'static) -> HandlerOption {
    HandlerOption::Template(Arc::new(template))
}

/// Derives chapter keys with `key_deriver` instead of `PathKey::default()`.
pub fn with_key_deriver(key_deriver: impl KeyDeriver + 'static) -> HandlerOption {
    HandlerOption::KeyDerivation(Arc::new(key_deriver))
}

/// Serves the chapters of one story.
#[derive(Clone)]
pub struct StoryHandler {
    story: Arc<Story>,
    template: Arc<dyn ChapterTemplate>,
    key_deriver: Arc<dyn KeyDeriver>,
}

impl StoryHandler {
    /// Builds a handler for `story`, applying `options` in order over the
    /// defaults (`HtmlTemplate`, `PathKey::default()`).
    pub fn new(
        story: impl Into<Arc<Story>>,
        options: impl IntoIterator<Item = HandlerOption>,
    ) -> Self {
        let mut handler = Self {
            story: story.into(),
            template: Arc::new(HtmlTemplate),
            key_deriver: Arc::new(PathKey::default()),
        };
        for option in options {
            match option {
                HandlerOption::Template(template) => handler.template = template,
                HandlerOption::KeyDerivation(key_deriver) => handler.key_deriver = key_deriver,
            }
        }
        handler
    }

    /// The story being served.
    #[must_use]
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Handles one request, always producing a response.
    ///
    /// Render failures are logged here with a correlation id and answered
    /// with a generic internal error.
    #[instrument(skip_all, fields(path = %request.uri().path()))]
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.render_chapter(request) {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    DispatchError::ChapterNotFound(key) => {
                        debug!(key = %key, "chapter not found");
                    }
                    DispatchError::Render {
                        key,
                        correlation_id,
                        source,
                    } => {
                        error!(
                            key = %key,
                            correlation_id = %correlation_id,
                            error = %source,
                            "failed to render chapter"
                        );
                    }
                }
                err.into_response()
            }
        }
    }

    /// Derives the key, looks the chapter up and renders it.
    ///
    /// The document is rendered into a buffer and only sent once the
    /// template has finished, so a failed render never leaks partial
    /// output.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::ChapterNotFound` if no chapter has the
    /// derived key, or `DispatchError::Render` if the template fails.
    pub fn render_chapter(&self, request: &Request) -> Result<Response, DispatchError> {
        let key = self.key_deriver.derive_key(request);
        let Some(chapter) = self.story.chapter(&key) else {
            return Err(DispatchError::ChapterNotFound(key));
        };

        let mut body = String::new();
        if let Err(source) = self.template.render(&mut body, chapter) {
            return Err(DispatchError::Render {
                key,
                correlation_id: Uuid::new_v4(),
                source,
            });
        }

        Ok(([(header::CONTENT_TYPE, self.template.content_type())], body).into_response())
    }
}

impl fmt::Debug for StoryHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoryHandler")
            .field("chapters", &self.story.len())
            .finish_non_exhaustive()
    }
}
