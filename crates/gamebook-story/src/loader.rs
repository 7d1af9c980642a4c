//! Decoding stories from their serialized form.
//!
//! A serialized story is an object keyed by chapter key. Each chapter may
//! carry a `title`, a `story` array of paragraphs and an `options` array
//! of `{ "text", "arc" }` objects. Missing or `null` fields decode as
//! empty values; unknown fields are ignored.

use std::fmt::Write as _;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::model::Story;

/// Failure to load a story. No partial story is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The story source could not be read.
    #[error("failed to read story: {0}")]
    Read(#[from] std::io::Error),

    /// The input is not a well-formed JSON story.
    #[error("malformed JSON story: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not a well-formed YAML story.
    #[error("malformed YAML story: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization formats a story can be decoded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoryFormat {
    /// JSON (the default).
    #[default]
    Json,
    /// YAML, using the same shape as JSON.
    Yaml,
}

impl StoryFormat {
    /// Picks a format from a file extension. Anything that is not
    /// `.yaml` or `.yml` is treated as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Story {
    /// Decodes a story from serialized bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the bytes are not a well-formed story in
    /// `format`.
    pub fn load(bytes: &[u8], format: StoryFormat) -> Result<Self, DecodeError> {
        let story: Self = match format {
            StoryFormat::Json => serde_json::from_slice(bytes)?,
            StoryFormat::Yaml => serde_yaml::from_slice(bytes)?,
        };
        debug!(chapters = story.len(), ?format, "decoded story");
        Ok(story)
    }

    /// Reads and decodes a story file, choosing the format from its
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Read` if the file cannot be read, or a decode
    /// variant if its content is malformed.
    pub fn from_file(path: &Path) -> Result<Self, DecodeError> {
        let bytes = std::fs::read(path)?;
        Self::load(&bytes, StoryFormat::from_path(path))
    }
}

/// Hex-encoded SHA-256 of a serialized story.
///
/// Identifies which revision of the story a server is running.
#[must_use]
pub fn story_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .fold(String::with_capacity(64), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Chapter, ChapterOption};

    const FULL_STORY: &str = r#"{
        "intro": {
            "title": "The Little Blue Gopher",
            "story": ["Once upon a time.", "There was a gopher."],
            "options": [
                { "text": "Go to New York", "arc": "new-york" },
                { "text": "Go to Denver", "arc": "denver" }
            ]
        },
        "home": {
            "title": "Home Sweet Home",
            "story": ["The end."]
        }
    }"#;

    #[test]
    fn test_load_json_preserves_fields_verbatim() {
        let story = Story::load(FULL_STORY.as_bytes(), StoryFormat::Json).unwrap();

        assert_eq!(story.len(), 2);
        let intro = story.chapter("intro").unwrap();
        assert_eq!(intro.title(), "The Little Blue Gopher");
        assert_eq!(intro.paragraphs(), ["Once upon a time.", "There was a gopher."]);
        assert_eq!(
            intro.options(),
            [
                ChapterOption::new("Go to New York", "new-york"),
                ChapterOption::new("Go to Denver", "denver"),
            ]
        );
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let story = Story::load(br#"{ "bare": {}, "untitled": { "options": [{}] } }"#, StoryFormat::Json)
            .unwrap();

        assert_eq!(story.chapter("bare").unwrap(), &Chapter::default());
        let untitled = story.chapter("untitled").unwrap();
        assert_eq!(untitled.title(), "");
        assert_eq!(untitled.options(), [ChapterOption::new("", "")]);
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let json = br#"{ "intro": { "title": null, "story": null, "options": [{ "text": null, "arc": "x" }] } }"#;

        let story = Story::load(json, StoryFormat::Json).unwrap();

        let intro = story.chapter("intro").unwrap();
        assert_eq!(intro.title(), "");
        assert!(intro.paragraphs().is_empty());
        assert_eq!(intro.options(), [ChapterOption::new("", "x")]);
    }

    #[test]
    fn test_descriptive_field_names_are_accepted() {
        let json = br#"{ "intro": { "paragraphs": ["Hi."], "options": [{ "text": "Go", "target_key": "next" }] } }"#;

        let story = Story::load(json, StoryFormat::Json).unwrap();

        let intro = story.chapter("intro").unwrap();
        assert_eq!(intro.paragraphs(), ["Hi."]);
        assert_eq!(intro.options()[0].target_key(), "next");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = br#"{ "intro": { "title": "T", "mood": "grim", "options": [{ "arc": "a", "weight": 3 }] } }"#;

        let story = Story::load(json, StoryFormat::Json).unwrap();

        assert_eq!(story.chapter("intro").unwrap().title(), "T");
    }

    #[test]
    fn test_dangling_targets_are_legal() {
        let json = br#"{ "intro": { "options": [{ "text": "Nowhere", "arc": "missing" }] } }"#;

        let story = Story::load(json, StoryFormat::Json).unwrap();

        assert!(!story.contains_key("missing"));
        assert_eq!(story.chapter("intro").unwrap().options()[0].target_key(), "missing");
    }

    #[test]
    fn test_truncated_json_fails() {
        let truncated = &FULL_STORY.as_bytes()[..FULL_STORY.len() / 2];

        let result = Story::load(truncated, StoryFormat::Json);

        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let result = Story::load(br#"{ "intro": { "story": "not a list" } }"#, StoryFormat::Json);

        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_top_level_array_fails() {
        let result = Story::load(b"[1, 2, 3]", StoryFormat::Json);

        assert!(result.is_err());
    }

    #[test]
    fn test_load_yaml_matches_json() {
        let yaml = "\
intro:
  title: The Little Blue Gopher
  story:
    - Once upon a time.
    - There was a gopher.
  options:
    - text: Go to New York
      arc: new-york
    - text: Go to Denver
      arc: denver
home:
  title: Home Sweet Home
  story:
    - The end.
";

        let from_yaml = Story::load(yaml.as_bytes(), StoryFormat::Yaml).unwrap();
        let from_json = Story::load(FULL_STORY.as_bytes(), StoryFormat::Json).unwrap();

        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let result = Story::load(b"intro: [unclosed", StoryFormat::Yaml);

        assert!(matches!(result, Err(DecodeError::Yaml(_))));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let result = Story::from_file(Path::new("/nonexistent/story.json"));

        assert!(matches!(result, Err(DecodeError::Read(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(StoryFormat::from_path(Path::new("gopher.json")), StoryFormat::Json);
        assert_eq!(StoryFormat::from_path(Path::new("gopher.yaml")), StoryFormat::Yaml);
        assert_eq!(StoryFormat::from_path(Path::new("gopher.YML")), StoryFormat::Yaml);
        assert_eq!(StoryFormat::from_path(Path::new("gopher")), StoryFormat::Json);
    }

    #[test]
    fn test_story_digest_is_stable_hex() {
        let digest = story_digest(b"{}");

        assert_eq!(digest.len(), 64);
        assert_eq!(digest, story_digest(b"{}"));
        assert_ne!(digest, story_digest(b"{ }"));
        assert_eq!(
            story_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
