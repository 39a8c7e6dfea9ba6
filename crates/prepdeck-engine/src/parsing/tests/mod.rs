//! Tests for the content parser as a whole.
//!
//! Structural assertions cover the documented behaviour; larger inputs are
//! pinned with inline `insta` snapshots of the normalized outline.

mod robustness;

use pretty_assertions::assert_eq;

use crate::parsing::{Block, Line, Span, parse, snapshot};

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

fn code(s: &str) -> Span {
    Span::InlineCode(s.to_string())
}

fn plain(spans: Vec<Span>) -> Line {
    Line::PlainLine { spans }
}

fn item(indent_depth: usize, marker: &str, spans: Vec<Span>) -> Line {
    Line::ListItem {
        indent_depth,
        marker: marker.to_string(),
        spans,
    }
}

fn group(lines: Vec<Line>) -> Block {
    Block::ParagraphGroup { lines }
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn whitespace_only_document() {
    assert!(parse("   ").is_empty());
    assert!(parse("\n\n\t\n  \n").is_empty());
}

#[test]
fn fence_is_opaque() {
    let doc = parse("a\n```py\nx = 1\n```\nb");

    assert_eq!(
        doc.blocks,
        vec![
            group(vec![plain(vec![text("a")])]),
            Block::CodeBlock {
                language: Some("py".to_string()),
                content: "x = 1\n".to_string(),
            },
            group(vec![plain(vec![text("b")])]),
        ]
    );
}

#[test]
fn fence_content_is_not_reparsed() {
    let doc = parse("```\n- not a list\nuse `this`\n\n\nstill code\n```");

    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: None,
            content: "- not a list\nuse `this`\n\n\nstill code\n".to_string(),
        }]
    );
}

#[test]
fn inline_code_precedence() {
    let doc = parse("Use `foo(x)` here");

    assert_eq!(
        doc.blocks,
        vec![group(vec![plain(vec![
            text("Use "),
            code("foo(x)"),
            text(" here"),
        ])])]
    );
}

#[test]
fn list_detection_with_indentation() {
    let doc = parse("- top\n  - nested");

    assert_eq!(
        doc.blocks,
        vec![group(vec![
            item(0, "-", vec![text("top")]),
            item(2, "-", vec![text("nested")]),
        ])]
    );
}

#[test]
fn numbered_markers() {
    let doc = parse("1. first\n2. second");

    assert_eq!(
        doc.blocks,
        vec![group(vec![
            item(0, "1.", vec![text("first")]),
            item(0, "2.", vec![text("second")]),
        ])]
    );
}

#[test]
fn deeper_indentation_is_just_a_larger_depth() {
    let doc = parse("- a\n  - b\n    - c\n      * d");
    let depths: Vec<usize> = match &doc.blocks[0] {
        Block::ParagraphGroup { lines } => lines
            .iter()
            .filter_map(|line| match line {
                Line::ListItem { indent_depth, .. } => Some(*indent_depth),
                Line::PlainLine { .. } => None,
            })
            .collect(),
        Block::CodeBlock { .. } => panic!("expected paragraph group"),
    };
    assert_eq!(depths, vec![0, 2, 4, 6]);
}

#[test]
fn mixed_lines_in_one_group() {
    let doc = parse("Steps:\n- sort\n- scan");

    assert_eq!(
        doc.blocks,
        vec![group(vec![
            plain(vec![text("Steps:")]),
            item(0, "-", vec![text("sort")]),
            item(0, "-", vec![text("scan")]),
        ])]
    );
}

#[test]
fn unterminated_fence_degrades_to_code_to_end() {
    let doc = parse("text\n```js\ncode here");

    assert_eq!(
        doc.blocks,
        vec![
            group(vec![plain(vec![text("text")])]),
            Block::CodeBlock {
                language: Some("js".to_string()),
                content: "code here".to_string(),
            },
        ]
    );
}

#[test]
fn lone_backtick_is_preserved_as_text() {
    let doc = parse("a `b");

    assert_eq!(doc.blocks, vec![group(vec![plain(vec![text("a `b")])])]);
    match &doc.blocks[0] {
        Block::ParagraphGroup { lines } => assert_eq!(lines[0].plain_text(), "a `b"),
        Block::CodeBlock { .. } => panic!("expected paragraph group"),
    }
}

#[test]
fn blank_lines_separate_groups() {
    let doc = parse("first\n\n\n\nsecond\nthird");

    assert_eq!(
        doc.blocks,
        vec![
            group(vec![plain(vec![text("first")])]),
            group(vec![plain(vec![text("second")]), plain(vec![text("third")])]),
        ]
    );
}

#[test]
fn trailing_spaces_after_fence_leave_no_blank_line() {
    let doc = parse("```x```   \n- a");

    assert_eq!(
        doc.blocks,
        vec![
            Block::CodeBlock {
                language: None,
                content: "x".to_string(),
            },
            group(vec![item(0, "-", vec![text("a")])]),
        ]
    );
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(
        parse("- a\r\n- b\r\n\r\nend"),
        parse("- a\n- b\n\nend")
    );
}

#[test]
fn parsing_is_deterministic() {
    let raw = "x `y` z\n\n```rs\nfn f() {}\n```\n- item";
    assert_eq!(parse(raw), parse(raw));
}

#[test]
fn worked_approach_outline() {
    let raw = concat!(
        "Two pointers walk inward from both ends.\n",
        "\n",
        "- Sort the array first\n",
        "  - `O(n log n)` cost\n",
        "1. Compare `a[i] + a[j]`\n",
        "2. Move the smaller side\n",
        "\n",
        "```python\n",
        "def two_sum(a, t):\n",
        "    pass\n",
        "```\n",
        "Watch out for the `tail` pitfall.",
    );
    let doc = parse(raw);
    snapshot::invariants(raw, &doc);

    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    paragraph
      plain: text "Two pointers walk inward from both ends."
    paragraph
      item 0 "-": text "Sort the array first"
      item 2 "-": code "O(n log n)" | text " cost"
      item 0 "1.": text "Compare " | code "a[i] + a[j]"
      item 0 "2.": text "Move the smaller side"
    code "python": "def two_sum(a, t):\n    pass\n"
    paragraph
      plain: text "Watch out for the " | code "tail" | text " pitfall."
    "#);
}

#[test]
fn degraded_input_outline() {
    let raw = "Odd `tick count` here `oops\n\n-no marker\n- \n```";
    let doc = parse(raw);

    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    paragraph
      plain: text "Odd " | code "tick count" | text " here `oops"
    paragraph
      plain: text "-no marker"
      item 0 "-":
    code: ""
    "#);
}
