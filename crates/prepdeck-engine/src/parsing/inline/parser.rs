use super::{cursor::Cursor, kinds::CodeSpan, types::Span};

/// A matched code span: byte range of the whole construct plus its inner text.
struct CodeSpanMatch<'a> {
    start: usize,
    end: usize,
    inner: &'a str,
}

/// Parses one line of text into alternating [`Span::Text`] and
/// [`Span::InlineCode`] segments.
///
/// Backticks pair up left to right. A final unmatched backtick, and
/// everything after it, stays in the surrounding text span, so no characters
/// are lost. Empty text segments are not emitted; an empty backtick pair
/// yields an empty `InlineCode`.
pub fn parse_spans(s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<Span>, text: &str) {
        if !text.is_empty() {
            out.push(Span::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        if let Some(m) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, &s[text_start..m.start]);
            out.push(Span::InlineCode(m.inner.to_string()));
            text_start = m.end;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if no closing backtick follows.
/// On failure, cursor position is restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<CodeSpanMatch<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if !cur.bump_until(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(CodeSpanMatch {
        start,
        end: cur.pos(),
        inner: cur.slice(inner_start, inner_end),
    })
}
