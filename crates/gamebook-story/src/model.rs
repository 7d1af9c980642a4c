//! Story data model: chapters, their options, and the story mapping.

use std::collections::HashMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Deserializer};

/// Bytes escaped when a key is placed in a URL path. `/` is kept so
/// nested keys stay readable; `%` is escaped so keys round-trip through
/// percent-decoding. The result contains no HTML-special characters.
const KEY_IN_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Treats an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A choice presented to the reader at the end of a chapter.
///
/// The target key is not checked against the story: an option may point
/// at a chapter that does not exist, which only surfaces as a not-found
/// response when a reader follows it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChapterOption {
    #[serde(default, deserialize_with = "null_as_default")]
    text: String,
    #[serde(
        rename = "arc",
        alias = "target_key",
        default,
        deserialize_with = "null_as_default"
    )]
    target_key: String,
}

impl ChapterOption {
    /// Creates an option labelled `text` that leads to `target_key`.
    #[must_use]
    pub fn new(text: impl Into<String>, target_key: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_key: target_key.into(),
        }
    }

    /// Display label of the link.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Key of the chapter this option leads to.
    #[must_use]
    pub fn target_key(&self) -> &str {
        &self.target_key
    }

    /// Request path that navigates to the target chapter, with the key
    /// percent-encoded.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/{}", utf8_percent_encode(&self.target_key, KEY_IN_PATH))
    }
}

/// A single node of the story graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(
        rename = "story",
        alias = "paragraphs",
        default,
        deserialize_with = "null_as_default"
    )]
    paragraphs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    options: Vec<ChapterOption>,
}

impl Chapter {
    /// Creates a chapter.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        paragraphs: Vec<String>,
        options: Vec<ChapterOption>,
    ) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            options,
        }
    }

    /// Chapter title; may be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Narrative paragraphs in display order.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[ChapterOption] {
        &self.options
    }
}

/// A complete story: chapters keyed by a unique, case-sensitive key.
///
/// There is no mutation API. A story is built once and then shared
/// read-only between concurrent requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Story {
    chapters: HashMap<String, Chapter>,
}

impl Story {
    /// Looks up the chapter stored under `key`.
    #[must_use]
    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.get(key)
    }

    /// Returns `true` if a chapter is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.chapters.contains_key(key)
    }

    /// Number of chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Returns `true` if the story has no chapters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapter keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.chapters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, Chapter)> for Story {
    fn from_iter<I: IntoIterator<Item = (String, Chapter)>>(iter: I) -> Self {
        Self {
            chapters: iter.into_iter().collect(),
        }
    }
}
