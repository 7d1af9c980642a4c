//! Plain-text rendering, for terminals and `curl`.

use std::fmt;

use gamebook_story::Chapter;

use crate::error::RenderError;
use crate::template::ChapterTemplate;

/// Renders a chapter as plain text, one option per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextTemplate;

impl ChapterTemplate for PlainTextTemplate {
    fn render(&self, out: &mut dyn fmt::Write, chapter: &Chapter) -> Result<(), RenderError> {
        if !chapter.title().is_empty() {
            writeln!(out, "{}", chapter.title())?;
            writeln!(out, "{}", "=".repeat(chapter.title().chars().count()))?;
            writeln!(out)?;
        }
        for paragraph in chapter.paragraphs() {
            writeln!(out, "{paragraph}")?;
            writeln!(out)?;
        }
        for option in chapter.options() {
            writeln!(out, "* {} -> {}", option.text(), option.href())?;
        }
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
