//! The template capability used by the dispatch handler.

use std::fmt;

use gamebook_story::Chapter;

use crate::error::RenderError;

/// Content type of the built-in HTML template.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Projects one chapter into a document.
///
/// Implementations must be shareable across concurrent requests.
pub trait ChapterTemplate: Send + Sync {
    /// Renders `chapter` into `out`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the template cannot be applied to the
    /// chapter or the output cannot be written. Output already written to
    /// `out` is not rolled back.
    fn render(&self, out: &mut dyn fmt::Write, chapter: &Chapter) -> Result<(), RenderError>;

    /// Value of the `Content-Type` header for rendered documents.
    fn content_type(&self) -> &'static str {
        HTML_CONTENT_TYPE
    }
}
