use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{TopicId, TopicNode, TopicRecord, TopicTree};
use crate::parsing::{Block, Document, Line, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Left padding per unit of list indent depth.
    pub list_indent_px: u32,
    /// Link target for the "all topics" navigation, if any.
    pub index_href: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            list_indent_px: 16,
            index_href: None,
        }
    }
}

pub fn render_document(doc: &Document, options: &HtmlOptions) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        match block {
            Block::CodeBlock { language, content } => {
                match language {
                    Some(lang) => {
                        let _ = write!(
                            out,
                            "<pre><code class=\"language-{}\">",
                            encode_double_quoted_attribute(lang)
                        );
                    }
                    None => out.push_str("<pre><code>"),
                }
                out.push_str(&encode_text(content));
                out.push_str("</code></pre>\n");
            }
            Block::ParagraphGroup { lines } => {
                out.push_str("<div class=\"paragraph\">\n");
                for line in lines {
                    render_line(&mut out, line, options);
                }
                out.push_str("</div>\n");
            }
        }
    }
    out
}

fn render_line(out: &mut String, line: &Line, options: &HtmlOptions) {
    match line {
        Line::ListItem {
            indent_depth,
            marker,
            spans,
        } => {
            let padding = *indent_depth as u64 * u64::from(options.list_indent_px);
            let _ = write!(
                out,
                "<div class=\"list-item\" style=\"padding-left: {padding}px\"><span class=\"marker\">{}</span> ",
                encode_text(marker)
            );
            render_spans(out, spans);
            out.push_str("</div>\n");
        }
        Line::PlainLine { spans } => {
            out.push_str("<p>");
            render_spans(out, spans);
            out.push_str("</p>\n");
        }
    }
}

fn render_spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&encode_text(text)),
            Span::InlineCode(code) => {
                out.push_str("<code>");
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
        }
    }
}

/// A standalone page for one topic.
///
/// Every text field is parsed and rendered under its heading. The diagram
/// is trusted markup and is inserted as stored.
pub fn render_topic_page(record: &TopicRecord, options: &HtmlOptions) -> String {
    let title = encode_text(&record.title);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(
        out,
        "<head><meta charset=\"utf-8\"><title>{title}</title></head>"
    );
    out.push_str("<body>\n");

    if let Some(href) = &options.index_href {
        let _ = writeln!(
            out,
            "<nav><a href=\"{}\">All topics</a></nav>",
            encode_double_quoted_attribute(href)
        );
    }

    out.push_str("<article class=\"topic\">\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    if let Some(difficulty) = record.difficulty {
        let _ = writeln!(
            out,
            "<p class=\"difficulty difficulty-{}\">{difficulty}</p>",
            difficulty.to_string().to_lowercase()
        );
    }

    for field in record.parsed() {
        let _ = writeln!(
            out,
            "<section class=\"field {}\">",
            field.kind.as_str()
        );
        let _ = writeln!(out, "<h2>{}</h2>", encode_text(&field.heading));
        out.push_str(&render_document(&field.document, options));
        out.push_str("</section>\n");
    }

    if let Some(diagram) = record.diagram() {
        out.push_str("<figure class=\"diagram\">\n");
        out.push_str(diagram);
        out.push_str("\n</figure>\n");
    }

    out.push_str("</article>\n</body>\n</html>\n");
    out
}

/// An index page listing the full outline, every category expanded.
///
/// Topic links point at `<link_prefix><topic id>.html` relative to the index.
pub fn render_index(tree: &TopicTree, link_prefix: &str) -> String {
    let title = encode_text(&tree.root.name);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(
        out,
        "<head><meta charset=\"utf-8\"><title>{title}</title></head>"
    );
    out.push_str("<body>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    render_outline(&mut out, &tree.root, link_prefix);
    out.push_str("</body>\n</html>\n");
    out
}

/// Relative URL of a topic page, each path segment percent-encoded.
pub fn topic_href(id: &TopicId) -> String {
    let segments: Vec<_> = id.as_str().split('/').map(urlencoding::encode).collect();
    format!("{}.html", segments.join("/"))
}

fn render_outline(out: &mut String, node: &TopicNode, link_prefix: &str) {
    let children = node.sorted_children();
    if children.is_empty() {
        return;
    }

    out.push_str("<ul>\n");
    for child in children {
        let name = encode_text(&child.name);
        match &child.topic {
            Some(id) => {
                let href = format!("{link_prefix}{}", topic_href(id));
                let _ = write!(
                    out,
                    "<li><a href=\"{}\">{name}</a>",
                    encode_double_quoted_attribute(&href)
                );
            }
            None => {
                let _ = write!(out, "<li>{name}");
            }
        }
        if !child.children.is_empty() {
            out.push('\n');
            render_outline(out, child, link_prefix);
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn renders_paragraphs_lists_and_code() {
        let doc = parse("Use `a < b`\n- top\n  - nested\n\n```py\nif x > 1:\n```");
        let html = render_document(&doc, &HtmlOptions::default());

        insta::assert_snapshot!(html, @r#"
        <div class="paragraph">
        <p>Use <code>a &lt; b</code></p>
        <div class="list-item" style="padding-left: 0px"><span class="marker">-</span> top</div>
        <div class="list-item" style="padding-left: 32px"><span class="marker">-</span> nested</div>
        </div>
        <pre><code class="language-py">if x &gt; 1:
        </code></pre>
        "#);
    }

    #[test]
    fn indent_scale_is_configurable() {
        let doc = parse("   1. deep");
        let options = HtmlOptions {
            list_indent_px: 10,
            ..HtmlOptions::default()
        };
        let html = render_document(&doc, &options);
        assert!(html.contains("padding-left: 30px"));
        assert!(html.contains("<span class=\"marker\">1.</span> deep"));
    }

    #[test]
    fn code_block_without_language_has_no_class() {
        let html = render_document(&parse("```\n<b>\n```"), &HtmlOptions::default());
        assert_eq!(html, "<pre><code>&lt;b&gt;\n</code></pre>\n");
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render_document(&parse(""), &HtmlOptions::default()), "");
    }

    fn record() -> TopicRecord {
        toml::from_str(
            r#"
title = "Stacks & Queues"
difficulty = "medium"
description = "LIFO vs `FIFO`."
pitfalls = ["Popping an empty <stack>"]
diagram = "<svg><text>a < b</text></svg>"
"#,
        )
        .unwrap()
    }

    #[test]
    fn topic_page_escapes_text_fields() {
        let html = render_topic_page(&record(), &HtmlOptions::default());

        assert!(html.contains("<title>Stacks &amp; Queues</title>"));
        assert!(html.contains("<h1>Stacks &amp; Queues</h1>"));
        assert!(html.contains("<p class=\"difficulty difficulty-medium\">Medium</p>"));
        assert!(html.contains("<section class=\"field description\">"));
        assert!(html.contains("<p>LIFO vs <code>FIFO</code>.</p>"));
        assert!(html.contains("Popping an empty &lt;stack&gt;"));
        assert!(!html.contains("<nav>"));
    }

    #[test]
    fn topic_page_passes_diagram_through() {
        let html = render_topic_page(&record(), &HtmlOptions::default());
        assert!(html.contains("<figure class=\"diagram\">\n<svg><text>a < b</text></svg>\n</figure>"));
    }

    #[test]
    fn topic_page_links_back_to_index() {
        let options = HtmlOptions {
            index_href: Some("../index.html".to_string()),
            ..HtmlOptions::default()
        };
        let html = render_topic_page(&record(), &options);
        assert!(html.contains("<nav><a href=\"../index.html\">All topics</a></nav>"));
    }

    #[test]
    fn index_lists_every_topic() {
        let tree = TopicTree::build(
            "Prep",
            [
                (TopicId::from("big-o"), "Big O".to_string()),
                (TopicId::from("arrays/two-sum"), "Two Sum".to_string()),
            ],
        );
        let html = render_index(&tree, "");

        assert!(html.contains(
            "<ul>\n<li>arrays\n<ul>\n<li><a href=\"arrays/two-sum.html\">Two Sum</a></li>\n</ul>\n</li>\n<li><a href=\"big-o.html\">Big O</a></li>\n</ul>\n"
        ));
    }

    #[test]
    fn index_links_topic_that_is_also_a_category() {
        let tree = TopicTree::build(
            "Prep",
            [
                (TopicId::from("arrays"), "Arrays".to_string()),
                (TopicId::from("arrays/two-sum"), "Two Sum".to_string()),
            ],
        );
        let html = render_index(&tree, "topics/");

        assert!(html.contains(
            "<ul>\n<li><a href=\"topics/arrays.html\">Arrays</a>\n<ul>\n<li><a href=\"topics/arrays/two-sum.html\">Two Sum</a></li>\n</ul>\n</li>\n</ul>\n"
        ));
    }

    #[rstest]
    #[case("c#-basics", "c%23-basics.html")]
    #[case("a?b", "a%3Fb.html")]
    #[case("graphs/min cut", "graphs/min%20cut.html")]
    #[case("arrays/two-sum", "arrays/two-sum.html")]
    fn topic_hrefs_are_percent_encoded(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(topic_href(&TopicId::from(id)), expected);
    }

    #[test]
    fn index_href_survives_url_special_characters() {
        let tree = TopicTree::build(
            "Prep",
            [(TopicId::from("c#-basics"), "C# basics".to_string())],
        );
        let html = render_index(&tree, "");
        assert!(html.contains("<li><a href=\"c%23-basics.html\">C# basics</a></li>"));
    }
}
