//! Malformed and unusual inputs: the parser must always produce a document
//! that satisfies the structural invariants.

use rstest::rstest;

use crate::parsing::{Block, parse, snapshot};

#[rstest]
#[case::empty("")]
#[case::lone_tick("`")]
#[case::two_ticks("``")]
#[case::lone_fence("```")]
#[case::four_ticks("````")]
#[case::five_ticks("`````")]
#[case::tick_then_fence("`a ```b")]
#[case::only_markers("-\n*\n1.\n")]
#[case::marker_without_text("- \n  * \n3. ")]
#[case::tabs("\t-\tx\n\t\t- y")]
#[case::multibyte("é `ü` ñ `\u{1F600}")]
#[case::multibyte_marker_indent("\u{3000}- wide space indent")]
#[case::crlf("a\r\n\r\n- b\r\n")]
#[case::lone_cr("a\rb")]
#[case::many_blank_lines("\n\n\n\na\n\n\n\n\nb\n\n\n")]
#[case::unterminated_after_text("prose\n```rust\nfn main() {")]
#[case::nested_fence_text("```md\n```inner```\n```")]
fn never_panics_and_holds_invariants(#[case] raw: &str) {
    let doc = parse(raw);
    snapshot::invariants(raw, &doc);
}

#[rstest]
#[case("a `b", "a `b")]
#[case("x ` y ` z `", "x  y  z `")]
#[case("`a` `b` `c", "a b `c")]
fn unmatched_ticks_lose_no_characters(#[case] raw: &str, #[case] expected: &str) {
    let doc = parse(raw);
    match doc.blocks.as_slice() {
        [Block::ParagraphGroup { lines }] => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].plain_text(), expected);
        }
        other => panic!("expected a single paragraph group, got {other:?}"),
    }
}

#[test]
fn unicode_whitespace_counts_as_one_indent_character() {
    let doc = parse("\u{3000}- wide");
    match doc.blocks.as_slice() {
        [Block::ParagraphGroup { lines }] => match &lines[0] {
            crate::parsing::Line::ListItem { indent_depth, .. } => assert_eq!(*indent_depth, 1),
            other => panic!("expected list item, got {other:?}"),
        },
        other => panic!("expected a single paragraph group, got {other:?}"),
    }
}

#[test]
fn large_input_parses() {
    let raw = "- item with `code`\n  - child\n\n```\nlisting\n```\n".repeat(2_000);
    let doc = parse(&raw);
    assert_eq!(doc.len(), 4_000);
}
