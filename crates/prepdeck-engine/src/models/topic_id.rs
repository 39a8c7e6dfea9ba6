use std::fmt;

use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

/// Identifies a topic by its path under the content root, without extension.
///
/// `arrays/two-sum.toml` has the id `arrays/two-sum`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(RelativePathBuf);

impl TopicId {
    pub const RECORD_EXTENSION: &'static str = "toml";

    /// Builds the id for a record file path relative to the content root.
    ///
    /// Returns `None` for files that aren't topic records.
    pub fn from_record_path(relative: &RelativePath) -> Option<Self> {
        if relative.extension() != Some(Self::RECORD_EXTENSION) {
            return None;
        }
        Some(Self(relative.with_extension("")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_relative_path(&self) -> &RelativePath {
        &self.0
    }

    /// Path of the record file relative to the content root.
    pub fn record_path(&self) -> RelativePathBuf {
        self.0.with_extension(Self::RECORD_EXTENSION)
    }

    /// Category segments above the topic itself.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        let mut segments: Vec<&str> = self.0.components().map(|c| c.as_str()).collect();
        segments.pop();
        segments.into_iter()
    }

    /// Last path segment, e.g. `two-sum`.
    pub fn slug(&self) -> &str {
        self.0.file_name().unwrap_or("untitled")
    }

    /// Human-friendly fallback name derived from the slug.
    pub fn fallback_title(&self) -> String {
        humanize(self.slug())
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TopicId {
    fn from(path: &str) -> Self {
        Self(RelativePathBuf::from(path))
    }
}

/// Turns `two-sum` or `binary_search` into `two sum` / `binary search`.
pub fn humanize(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
}
