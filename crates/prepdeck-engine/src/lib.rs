pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{ContentRepository, IoError};
pub use models::{TopicId, TopicRecord, TopicTree, TopicTreeItem};
pub use parsing::{Block, Document, Line, Span, parse};
