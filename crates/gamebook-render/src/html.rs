//! The built-in HTML template.

use std::fmt;

use askama::Template;
use gamebook_story::{Chapter, ChapterOption};

use crate::error::RenderError;
use crate::template::ChapterTemplate;

/// View of a chapter handed to `templates/chapter.html`.
#[derive(Template)]
#[template(path = "chapter.html")]
struct ChapterPage<'a> {
    title: &'a str,
    paragraphs: &'a [String],
    options: &'a [ChapterOption],
}

/// Minimal styled HTML page: the title as heading, one block per
/// paragraph, and the options as a list of links to `/{target_key}`.
///
/// The template is compiled into the binary. Text fields are HTML-escaped;
/// link targets are percent-encoded by `ChapterOption::href`, which leaves
/// nothing for HTML escaping to do.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

impl ChapterTemplate for HtmlTemplate {
    fn render(&self, out: &mut dyn fmt::Write, chapter: &Chapter) -> Result<(), RenderError> {
        let page = ChapterPage {
            title: chapter.title(),
            paragraphs: chapter.paragraphs(),
            options: chapter.options(),
        };
        out.write_str(&page.render()?)?;
        Ok(())
    }
}
