//! Gamebook — story model and loader.
//!
//! A story is a set of named chapters, each holding a title, narrative
//! paragraphs and the options leading to other chapters. Stories are
//! decoded once from JSON or YAML and are read-only afterwards.

pub mod loader;
pub mod model;

pub use loader::{DecodeError, StoryFormat, story_digest};
pub use model::{Chapter, ChapterOption, Story};
