use serde::Serialize;

use crate::parsing::inline::Span;

/// A parsed content string: an ordered sequence of blocks.
///
/// Block order follows input order. Blocks carry no identity beyond their
/// position, and the whole tree is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Returns the blocks in input order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns true if the input produced no blocks (empty or whitespace-only).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// A top-level block of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Block {
    /// A verbatim fenced listing. No further parsing happens inside.
    CodeBlock {
        /// Language tag from the first line of the fence, if one was present.
        language: Option<String>,
        /// Listing text exactly as written, minus the delimiters and tag line.
        content: String,
    },
    /// Prose separated from its neighbours by a blank line or a fence.
    ///
    /// `lines` is never empty.
    ParagraphGroup { lines: Vec<Line> },
}

/// One line of a [`Block::ParagraphGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Line {
    /// A bullet (`-`, `*`) or numbered (`1.`) entry.
    ListItem {
        /// Count of leading whitespace characters before the marker.
        indent_depth: usize,
        /// The marker text exactly as written.
        marker: String,
        spans: Vec<Span>,
    },
    /// An ordinary prose line.
    PlainLine { spans: Vec<Span> },
}

impl Line {
    pub fn spans(&self) -> &[Span] {
        match self {
            Line::ListItem { spans, .. } | Line::PlainLine { spans } => spans,
        }
    }

    /// Concatenated span contents (the line text with code backticks removed).
    pub fn plain_text(&self) -> String {
        self.spans().iter().map(Span::content).collect()
    }
}
