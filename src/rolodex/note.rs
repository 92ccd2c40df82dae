use crate::fields::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A label attached to a note. Tags are free-form and may repeat on a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A note entry as stored: the text exactly as written plus its own tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "note")]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn has_tag_ignore_case(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.as_str().to_lowercase() == tag)
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.as_str().to_string()).collect()
    }
}

/// A note as presented to callers: its 1-based position, display text and tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub position: usize,
    pub text: String,
    pub tags: Vec<String>,
}

impl NoteView {
    pub fn new(position: usize, note: &Note) -> Self {
        Self {
            position,
            text: capitalize(&note.text),
            tags: note.tag_names(),
        }
    }
}
