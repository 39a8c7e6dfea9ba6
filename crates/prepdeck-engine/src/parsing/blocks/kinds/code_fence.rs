use std::sync::OnceLock;

use regex::Regex;

/// A fence body split into its optional language tag and verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceBody {
    pub language: Option<String>,
    pub content: String,
}

pub struct CodeFence;

impl CodeFence {
    /// The delimiter that opens and closes a fenced listing.
    pub const BACKTICKS: &'static str = "```";

    /// Decodes the text between two fence delimiters.
    ///
    /// If the first line is a bare run of lowercase ASCII letters, that line
    /// is removed and the letters become the language. An empty run (the
    /// fence directly followed by a newline) removes the newline and leaves
    /// the language unset. Everything else is kept verbatim.
    pub fn decode(body: &str) -> FenceBody {
        match language_tag_regex().captures(body) {
            Some(caps) => {
                let tag = caps.get(1).map_or("", |m| m.as_str());
                let header_len = caps.get(0).map_or(0, |m| m.end());
                FenceBody {
                    language: (!tag.is_empty()).then(|| tag.to_string()),
                    content: body[header_len..].to_string(),
                }
            }
            None => FenceBody {
                language: None,
                content: body.to_string(),
            },
        }
    }
}

fn language_tag_regex() -> &'static Regex {
    static LANGUAGE_TAG: OnceLock<Regex> = OnceLock::new();
    LANGUAGE_TAG.get_or_init(|| Regex::new(r"\A([a-z]*)\r?\n").expect("Invalid language tag regex"))
}
