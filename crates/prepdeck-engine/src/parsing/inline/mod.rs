//! # Inline Parsing
//!
//! Cursor-based span parsing of a single line with explicit raw zones.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, InlineCode)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_spans()` main entry point
//!
//! ## Raw Zones
//!
//! Code spans are raw: whatever sits between a matched pair of backticks is
//! kept verbatim. Unmatched backticks never start a raw zone.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_spans;
pub use types::Span;
