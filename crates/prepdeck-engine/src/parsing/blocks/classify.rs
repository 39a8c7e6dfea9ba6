use crate::parsing::inline::parse_spans;

use super::{kinds::ListMarker, types::Line};

/// Classifies single prose lines as list items or plain lines.
///
/// Each line is classified on its own, with no reference to its neighbours.
pub struct ContentLineClassifier;

impl ContentLineClassifier {
    /// Classifies a line and parses its text into spans.
    ///
    /// For list items only the text after the marker is span-parsed.
    pub fn classify(&self, line: &str) -> Line {
        match ListMarker::detect(line) {
            Some(item) => Line::ListItem {
                indent_depth: item.indent_depth,
                marker: item.marker.to_string(),
                spans: parse_spans(item.rest),
            },
            None => Line::PlainLine {
                spans: parse_spans(line),
            },
        }
    }
}
