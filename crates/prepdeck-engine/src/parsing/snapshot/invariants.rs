use crate::parsing::{Block, Document, Line, Span, blocks::kinds::CodeFence};

/// Panics if `doc` breaks a structural guarantee of the parser.
///
/// Checked for every document:
/// - paragraph groups are non-empty
/// - no empty text spans and no two adjacent text spans
///
/// Additionally, when `raw` contains no fence delimiter, every non-whitespace
/// character of the input (ignoring backticks) must reappear in order across
/// markers and span contents. If such a document holds only plain lines, each
/// parsed line must equal its input line exactly, backticks aside, and only
/// whitespace-only input lines may be dropped.
pub fn check(raw: &str, doc: &Document) {
    for block in &doc.blocks {
        if let Block::ParagraphGroup { lines } = block {
            assert!(!lines.is_empty(), "empty paragraph group in {doc:?}");
            for line in lines {
                check_spans(line.spans());
            }
        }
    }

    if !raw.contains(CodeFence::BACKTICKS) {
        let expected = significant(raw);
        let actual = significant(&reconstruct(doc));
        assert_eq!(
            actual, expected,
            "span contents do not reconstruct input {raw:?}"
        );

        if paragraph_lines(doc).all(|line| matches!(line, Line::PlainLine { .. })) {
            check_plain_lines_exact(raw, doc);
        }
    }
}

fn paragraph_lines(doc: &Document) -> impl Iterator<Item = &Line> {
    doc.blocks
        .iter()
        .filter_map(|block| match block {
            Block::ParagraphGroup { lines } => Some(lines),
            Block::CodeBlock { .. } => None,
        })
        .flatten()
}

fn check_plain_lines_exact(raw: &str, doc: &Document) {
    let mut source = raw
        .split('\n')
        .map(|line| without_ticks(line.strip_suffix('\r').unwrap_or(line)));

    for line in paragraph_lines(doc) {
        let parsed = without_ticks(&line.plain_text());
        loop {
            let Some(next) = source.next() else {
                panic!("parsed line {parsed:?} not found in input {raw:?}");
            };
            if next == parsed {
                break;
            }
            assert!(
                next.trim().is_empty(),
                "input line {next:?} altered to {parsed:?}"
            );
        }
    }

    for rest in source {
        assert!(rest.trim().is_empty(), "input line {rest:?} missing from {doc:?}");
    }
}

fn without_ticks(s: &str) -> String {
    s.chars().filter(|c| *c != '`').collect()
}

fn check_spans(spans: &[Span]) {
    for span in spans {
        if let Span::Text(s) = span {
            assert!(!s.is_empty(), "empty text span in {spans:?}");
        }
    }
    for pair in spans.windows(2) {
        assert!(
            !matches!(pair, [Span::Text(_), Span::Text(_)]),
            "adjacent text spans in {spans:?}"
        );
    }
}

fn reconstruct(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::CodeBlock { content, .. } => out.push_str(content),
            Block::ParagraphGroup { lines } => {
                for line in lines {
                    if let Line::ListItem { marker, .. } = line {
                        out.push_str(marker);
                        out.push(' ');
                    }
                    out.push_str(&line.plain_text());
                    out.push('\n');
                }
                out.push('\n');
            }
        }
    }
    out
}

fn significant(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '`')
        .collect()
}
