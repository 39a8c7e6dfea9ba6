use super::kinds::CodeFence;

/// A slice of the raw input, either outside or inside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceToken<'a> {
    /// Text between fences, still to be split into paragraphs.
    Text(&'a str),
    /// Text between an opening and closing delimiter, delimiters excluded.
    Code(&'a str),
}

/// Iterator splitting raw input into alternating text and code tokens.
///
/// A code token runs from one triple-backtick delimiter to the next. An
/// opening delimiter with no partner extends the code token to end of input.
/// Empty text tokens are skipped; code tokens are always yielded, even when
/// empty.
pub struct FenceTokens<'a> {
    rest: &'a str,
    pending_code: Option<&'a str>,
}

impl<'a> FenceTokens<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            rest: raw,
            pending_code: None,
        }
    }
}

impl<'a> Iterator for FenceTokens<'a> {
    type Item = FenceToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(code) = self.pending_code.take() {
            return Some(FenceToken::Code(code));
        }
        if self.rest.is_empty() {
            return None;
        }

        let Some(open) = self.rest.find(CodeFence::BACKTICKS) else {
            return Some(FenceToken::Text(std::mem::take(&mut self.rest)));
        };

        let text = &self.rest[..open];
        let after_open = &self.rest[open + CodeFence::BACKTICKS.len()..];
        let code = match after_open.find(CodeFence::BACKTICKS) {
            Some(close) => {
                self.rest = &after_open[close + CodeFence::BACKTICKS.len()..];
                &after_open[..close]
            }
            None => {
                self.rest = "";
                after_open
            }
        };

        if text.is_empty() {
            Some(FenceToken::Code(code))
        } else {
            self.pending_code = Some(code);
            Some(FenceToken::Text(text))
        }
    }
}

/// Splits `raw` into fence tokens in input order.
pub fn tokenize(raw: &str) -> FenceTokens<'_> {
    FenceTokens::new(raw)
}
