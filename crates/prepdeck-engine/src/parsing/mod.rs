pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use blocks::{Block, Document, Line};
pub use inline::Span;

use blocks::{DocumentBuilder, tokenize};

/// Parses a loosely formatted content string into a [`Document`].
///
/// Total: every input yields a document. Unterminated fences run to end of
/// input, unmatched backticks stay as text, and empty or whitespace-only
/// input yields a document with no blocks. Pure and deterministic, so
/// callers may memoize by input.
pub fn parse(raw: &str) -> Document {
    let mut builder = DocumentBuilder::new();
    for token in tokenize(raw) {
        builder.push(token);
    }
    builder.finish()
}
