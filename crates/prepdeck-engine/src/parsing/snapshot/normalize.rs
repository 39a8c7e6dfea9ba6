use std::fmt::Write;

use crate::parsing::{Block, Document, Line, Span};

/// Renders a document as a compact, stable outline for snapshot assertions.
///
/// One row per block and per line, with strings shown in debug form so
/// whitespace and newlines are visible:
///
/// ```text
/// paragraph
///   plain: text "Use " | code "foo(x)" | text " here"
///   item 2 "-": text "nested"
/// code "py": "x = 1\n"
/// ```
pub fn outline(doc: &Document) -> String {
    let mut rows = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::CodeBlock { language, content } => match language {
                Some(lang) => rows.push(format!("code {lang:?}: {content:?}")),
                None => rows.push(format!("code: {content:?}")),
            },
            Block::ParagraphGroup { lines } => {
                rows.push("paragraph".to_string());
                rows.extend(lines.iter().map(line_row));
            }
        }
    }
    rows.join("\n")
}

fn line_row(line: &Line) -> String {
    let mut row = String::from("  ");
    match line {
        Line::ListItem {
            indent_depth,
            marker,
            ..
        } => {
            let _ = write!(row, "item {indent_depth} {marker:?}:");
        }
        Line::PlainLine { .. } => row.push_str("plain:"),
    }

    let spans = line
        .spans()
        .iter()
        .map(|span| match span {
            Span::Text(s) => format!("text {s:?}"),
            Span::InlineCode(s) => format!("code {s:?}"),
        })
        .collect::<Vec<_>>();
    if !spans.is_empty() {
        row.push(' ');
        row.push_str(&spans.join(" | "));
    }
    row
}
