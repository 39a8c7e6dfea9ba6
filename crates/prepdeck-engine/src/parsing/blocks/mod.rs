//! # Block Parsing
//!
//! Turns a raw content string into a sequence of [`Block`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Fence tokenization** (`tokenize`): the input is split into text and
//!    code tokens at triple-backtick delimiters. Code tokens are never split.
//! 2. **Fence decoding** (`kinds::CodeFence`): an optional language tag line
//!    is peeled off each code token.
//! 3. **Paragraph splitting** (`kinds::Paragraph`): text tokens are split on
//!    blank lines.
//! 4. **Line classification** (`classify`): each line becomes a list item or
//!    a plain line, and its text is handed to inline parsing.
//!
//! `builder::DocumentBuilder` drives phases 2-4 over the token stream.
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Paragraph groups always hold at least one line
//! - Every input, however malformed, produces a document

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod tokenize;
pub mod types;

pub use builder::DocumentBuilder;
pub use classify::ContentLineClassifier;
pub use tokenize::{FenceToken, FenceTokens, tokenize};
pub use types::{Block, Document, Line};
