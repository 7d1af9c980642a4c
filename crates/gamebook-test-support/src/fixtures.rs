//! Sample stories.

use gamebook_story::{Chapter, Story, StoryFormat};

/// A three-chapter story with a cycle (`intro` ↔ `next`) and one
/// dangling option (`next` → `nowhere`).
const SAMPLE_STORY_JSON: &str = r#"{
  "intro": {
    "title": "The Beginning",
    "story": ["Once upon a time."],
    "options": [{ "text": "Continue", "arc": "next" }]
  },
  "next": {
    "title": "The Crossroads",
    "story": ["The road forks.", "Pick a path."],
    "options": [
      { "text": "Go back", "arc": "intro" },
      { "text": "Wander off", "arc": "nowhere" }
    ]
  },
  "home": {
    "title": "Home",
    "story": ["You made it home."]
  }
}"#;

/// Decodes `SAMPLE_STORY_JSON`.
///
/// # Panics
///
/// Panics if the fixture is not a valid story.
#[must_use]
pub fn sample_story() -> Story {
    Story::load(SAMPLE_STORY_JSON.as_bytes(), StoryFormat::Json)
        .expect("sample story fixture must decode")
}

/// A story holding exactly one chapter.
#[must_use]
pub fn single_chapter_story(key: &str, chapter: Chapter) -> Story {
    std::iter::once((key.to_owned(), chapter)).collect()
}
