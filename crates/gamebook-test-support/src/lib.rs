//! Shared test fixtures and utilities for the Gamebook server.

mod fixtures;
mod logs;
mod templates;

pub use fixtures::{sample_story, single_chapter_story};
pub use logs::CapturedLogs;
pub use templates::{FailingTemplate, LabelTemplate, PartialThenFailTemplate};
