//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//!
//! The parser refers to these constants; it never hardcodes `` ` ``.

pub mod code_span;

pub use code_span::CodeSpan;
