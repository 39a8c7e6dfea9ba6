use std::sync::OnceLock;

use regex::Regex;

/// A line recognised as a list item, borrowing from the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMatch<'a> {
    /// Number of leading whitespace characters before the marker.
    pub indent_depth: usize,
    /// `-`, `*`, or a digit run followed by `.`.
    pub marker: &'a str,
    /// Line text after the marker and its separating spaces.
    pub rest: &'a str,
}

pub struct ListMarker;

impl ListMarker {
    /// Matches `<whitespace*><marker><space+><rest>` against a single line.
    ///
    /// Indentation is the raw character count, not normalised to any tab
    /// width.
    pub fn detect(line: &str) -> Option<ListMatch<'_>> {
        let caps = list_item_regex().captures(line)?;
        let indent = caps.get(1)?.as_str();
        Some(ListMatch {
            indent_depth: indent.chars().count(),
            marker: caps.get(2)?.as_str(),
            rest: caps.get(3)?.as_str(),
        })
    }
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM.get_or_init(|| {
        Regex::new(r"\A(\s*)([-*]|[0-9]+\.) +(.*)\z").expect("Invalid list item regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- top", 0, "-", "top")]
    #[case("* star", 0, "*", "star")]
    #[case("  - nested", 2, "-", "nested")]
    #[case("1. first", 0, "1.", "first")]
    #[case("12.   wide gap", 0, "12.", "wide gap")]
    #[case("\t- tabbed", 1, "-", "tabbed")]
    #[case("      - deep", 6, "-", "deep")]
    #[case("- ", 0, "-", "")]
    #[case("- `code` item", 0, "-", "`code` item")]
    fn detects_list_items(
        #[case] line: &str,
        #[case] indent_depth: usize,
        #[case] marker: &str,
        #[case] rest: &str,
    ) {
        assert_eq!(
            ListMarker::detect(line),
            Some(ListMatch {
                indent_depth,
                marker,
                rest
            })
        );
    }

    #[rstest]
    #[case("plain prose")]
    #[case("-no space")]
    #[case("-")]
    #[case("**bold**")]
    #[case("1.5 is a number")]
    #[case("1) paren")]
    #[case("+ plus")]
    #[case("a. letter")]
    #[case("")]
    fn rejects_non_list_lines(#[case] line: &str) {
        assert_eq!(ListMarker::detect(line), None);
    }
}
