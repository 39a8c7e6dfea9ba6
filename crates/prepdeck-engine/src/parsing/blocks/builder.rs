use super::{
    classify::ContentLineClassifier,
    kinds::{CodeFence, Paragraph},
    tokenize::FenceToken,
    types::{Block, Document, Line},
};

/// Assembles fence tokens into a [`Document`], preserving input order.
pub struct DocumentBuilder {
    classifier: ContentLineClassifier,
    out: Vec<Block>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            classifier: ContentLineClassifier,
            out: vec![],
        }
    }

    pub fn push(&mut self, token: FenceToken<'_>) {
        match token {
            FenceToken::Code(body) => self.push_code(body),
            FenceToken::Text(text) => self.push_text(text),
        }
    }

    pub fn finish(self) -> Document {
        Document { blocks: self.out }
    }

    fn push_code(&mut self, body: &str) {
        let decoded = CodeFence::decode(body);
        self.out.push(Block::CodeBlock {
            language: decoded.language,
            content: decoded.content,
        });
    }

    fn push_text(&mut self, text: &str) {
        for chunk in Paragraph::chunks(text) {
            let lines: Vec<Line> = Paragraph::lines(chunk)
                .map(|line| self.classifier.classify(line))
                .collect();
            // Chunks are filtered for blank content, so this only guards the invariant.
            if !lines.is_empty() {
                self.out.push(Block::ParagraphGroup { lines });
            }
        }
    }
}
