use serde::Serialize;

/// An inline segment of a line.
///
/// Spans alternate between text and code; concatenating their contents
/// reproduces the line with the code-span backticks removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum Span {
    /// Plain text outside any backtick pair.
    Text(String),
    /// Text strictly between a matched pair of backticks. This is a raw zone.
    InlineCode(String),
}

impl Span {
    pub fn content(&self) -> &str {
        match self {
            Span::Text(s) | Span::InlineCode(s) => s,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Span::InlineCode(_))
    }
}
