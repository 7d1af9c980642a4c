//! Test templates — `ChapterTemplate` implementations for tests.

use std::fmt;

use gamebook_render::{ChapterTemplate, RenderError};
use gamebook_story::Chapter;

/// A template that rejects every chapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTemplate;

impl ChapterTemplate for FailingTemplate {
    fn render(&self, _out: &mut dyn fmt::Write, _chapter: &Chapter) -> Result<(), RenderError> {
        Err(RenderError::Incompatible(
            "template expects a `body` field".to_owned(),
        ))
    }
}

/// A template that writes some output before failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialThenFailTemplate;

impl PartialThenFailTemplate {
    /// The fragment written before the failure.
    pub const FRAGMENT: &'static str = "<html><body><h1>partial";
}

impl ChapterTemplate for PartialThenFailTemplate {
    fn render(&self, out: &mut dyn fmt::Write, _chapter: &Chapter) -> Result<(), RenderError> {
        out.write_str(Self::FRAGMENT)?;
        Err(RenderError::Incompatible("ran out of fields".to_owned()))
    }
}

/// A template that writes `"{label}:{title}"` as plain text, so tests can
/// tell which of several templates rendered a response.
#[derive(Debug, Clone, Copy)]
pub struct LabelTemplate(pub &'static str);

impl ChapterTemplate for LabelTemplate {
    fn render(&self, out: &mut dyn fmt::Write, chapter: &Chapter) -> Result<(), RenderError> {
        write!(out, "{}:{}", self.0, chapter.title())?;
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
