//! Gamebook — chapter templates and rendering.
//!
//! Rendering projects a single chapter through a template into a
//! document. A template sees nothing but that chapter, so it cannot
//! resolve or validate the targets of the chapter's options.

pub mod error;
pub mod html;
pub mod plain;
pub mod template;

pub use error::RenderError;
pub use html::HtmlTemplate;
pub use plain::PlainTextTemplate;
pub use template::ChapterTemplate;
