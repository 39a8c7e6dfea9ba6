//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a `Document` as a stable text outline for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (non-empty
//!   paragraph groups, well-formed span runs, lossless reconstruction of
//!   fence-free input)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
