use std::sync::OnceLock;

use regex::Regex;

pub struct Paragraph;

impl Paragraph {
    /// Splits a text token into paragraph chunks on blank-line boundaries.
    ///
    /// A boundary is a run of two or more consecutive newlines. Chunks that
    /// are empty or whitespace-only are dropped, and whitespace-only lines at
    /// either end of a chunk are trimmed. Leading spaces on the first real
    /// line are kept since they carry list indentation.
    pub fn chunks(text: &str) -> impl Iterator<Item = &str> {
        blank_line_regex()
            .split(text)
            .map(|chunk| chunk.trim_matches(['\r', '\n']))
            .filter(|chunk| !chunk.trim().is_empty())
            .map(trim_blank_edge_lines)
    }

    /// Splits a chunk into its lines, dropping any carriage return.
    pub fn lines(chunk: &str) -> impl Iterator<Item = &str> {
        chunk.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

fn trim_blank_edge_lines(chunk: &str) -> &str {
    let start = leading_blank_lines_regex().find(chunk).map_or(0, |m| m.end());
    let chunk = &chunk[start..];
    let end = trailing_blank_lines_regex()
        .find(chunk)
        .map_or(chunk.len(), |m| m.start());
    &chunk[..end]
}

fn leading_blank_lines_regex() -> &'static Regex {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    LEADING.get_or_init(|| {
        Regex::new(r"\A(?:[ \t]*\r?\n)+").expect("Invalid leading blank lines regex")
    })
}

fn trailing_blank_lines_regex() -> &'static Regex {
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    TRAILING.get_or_init(|| {
        Regex::new(r"(?:\r?\n[ \t]*)+\z").expect("Invalid trailing blank lines regex")
    })
}

fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE.get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid blank line regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str) -> Vec<&str> {
        Paragraph::chunks(text).collect()
    }

    #[test]
    fn single_chunk_without_blank_line() {
        assert_eq!(chunks("a\nb"), vec!["a\nb"]);
    }

    #[test]
    fn splits_on_blank_line() {
        assert_eq!(chunks("a\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn collapses_runs_of_blank_lines() {
        assert_eq!(chunks("a\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn drops_whitespace_only_chunks() {
        assert_eq!(chunks("\n\n   \n\na\n\n"), vec!["a"]);
    }

    #[test]
    fn trims_edge_newlines_but_keeps_indent() {
        assert_eq!(chunks("\n  - item\n"), vec!["  - item"]);
    }

    #[test]
    fn trims_whitespace_only_edge_lines() {
        assert_eq!(chunks("   \n- a"), vec!["- a"]);
        assert_eq!(chunks(" \t\r\n  \n  - a\n  \t"), vec!["  - a"]);
        assert_eq!(chunks("a\n   \nb   "), vec!["a\n   \nb   "]);
    }

    #[test]
    fn crlf_blank_lines_split() {
        assert_eq!(chunks("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn lines_strip_carriage_returns() {
        let lines: Vec<_> = Paragraph::lines("a\r\nb").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
