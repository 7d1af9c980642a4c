//! Rendering error types.

use thiserror::Error;

/// A chapter could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template engine failed while evaluating the template.
    #[error("template evaluation failed: {0}")]
    Template(#[from] askama::Error),

    /// The template cannot be applied to the chapter's data.
    #[error("template incompatible with chapter: {0}")]
    Incompatible(String),

    /// Writing to the output sink failed.
    #[error("failed to write rendered output")]
    Write(#[from] std::fmt::Error),
}
