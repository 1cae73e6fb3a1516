//! Immutable snapshots and copy-with-changes derivation.
//!
//! A snapshot is never mutated after construction. Every "change" is a call
//! to [`CopyWith::copy_with`] with a patch whose fields are all optional:
//! present fields replace the original value, absent fields are copied over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derives a new value from `self`, overriding only the fields set in the patch.
pub trait CopyWith: Sized {
    type Patch;

    fn copy_with(&self, patch: Self::Patch) -> Self;
}

/// Point-in-time state of a text editor buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    content: String,
    cursor: usize,
    dirty: bool,
    tags: Vec<String>,
}

impl EditorState {
    pub fn new(content: impl Into<String>, cursor: usize, dirty: bool, tags: Vec<String>) -> Self {
        EditorState {
            content: content.into(),
            cursor,
            dirty,
            tags,
        }
    }

    /// Clean buffer with the cursor at the end of `content`.
    pub fn clean(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self::new(content, cursor, false, Vec::new())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn derive_with(&self, patch: EditorPatch) -> Self {
        self.copy_with(patch)
    }
}

impl CopyWith for EditorState {
    type Patch = EditorPatch;

    fn copy_with(&self, patch: EditorPatch) -> Self {
        EditorState {
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            cursor: patch.cursor.unwrap_or(self.cursor),
            dirty: patch.dirty.unwrap_or(self.dirty),
            // Element-wise copy keeps the derived tags independent of ours.
            tags: patch
                .tags
                .unwrap_or_else(|| self.tags.iter().cloned().collect()),
        }
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" @{}", self.content, self.cursor)?;
        if self.dirty {
            write!(f, " (modified)")?;
        }
        if !self.tags.is_empty() {
            write!(f, " [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Partial set of overrides for [`EditorState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorPatch {
    pub content: Option<String>,
    pub cursor: Option<usize>,
    pub dirty: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl EditorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn dirty(mut self, dirty: bool) -> Self {
        self.dirty = Some(dirty);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.cursor.is_none() && self.dirty.is_none() && self.tags.is_none()
    }
}
