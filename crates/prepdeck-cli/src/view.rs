//! Turns parsed topic content into styled terminal lines.

use prepdeck_engine::models::{ParsedField, TopicRecord};
use prepdeck_engine::parsing::{Block, Document, Line as ContentLine, Span as ContentSpan};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CODE_INDENT: &str = "    ";

fn heading_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn inline_code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn code_block_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn document_lines(doc: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in doc.blocks().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match block {
            Block::CodeBlock { language, content } => {
                if let Some(lang) = language {
                    lines.push(Line::styled(
                        format!("{CODE_INDENT}[{lang}]"),
                        Style::default().add_modifier(Modifier::DIM),
                    ));
                }
                lines.extend(content.lines().map(|code| {
                    Line::styled(format!("{CODE_INDENT}{code}"), code_block_style())
                }));
            }
            Block::ParagraphGroup { lines: group } => {
                lines.extend(group.iter().map(content_line));
            }
        }
    }
    lines
}

fn content_line(line: &ContentLine) -> Line<'static> {
    let mut spans = Vec::new();
    if let ContentLine::ListItem {
        indent_depth,
        marker,
        ..
    } = line
    {
        spans.push(Span::raw(format!("{}{marker} ", " ".repeat(*indent_depth))));
    }
    spans.extend(line.spans().iter().map(|span| match span {
        ContentSpan::Text(text) => Span::raw(text.clone()),
        ContentSpan::InlineCode(code) => Span::styled(code.clone(), inline_code_style()),
    }));
    Line::from(spans)
}

/// Full detail panel for one topic.
pub fn topic_lines(record: &TopicRecord, fields: &[ParsedField]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        record.title.clone(),
        heading_style().add_modifier(Modifier::UNDERLINED),
    )];
    if let Some(difficulty) = record.difficulty {
        lines.push(Line::from(format!("Difficulty: {difficulty}")));
    }

    for field in fields {
        lines.push(Line::default());
        lines.push(Line::styled(field.heading.clone(), heading_style()));
        lines.extend(document_lines(&field.document));
    }

    if let Some(diagram) = record.diagram() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("[diagram: {} bytes, see the HTML export]", diagram.len()),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    lines
}

pub fn category_lines(name: &str) -> Vec<Line<'static>> {
    vec![
        Line::styled(format!("📁 {name}"), heading_style()),
        Line::default(),
        Line::from("Press Enter/Space to toggle, → to expand, ← to collapse"),
    ]
}
