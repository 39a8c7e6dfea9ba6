//! Presentation of parsed content.
//!
//! The parser produces structure only; pixel scale, escaping and layout
//! are decided here.

pub mod html;

pub use html::{HtmlOptions, render_document, render_index, render_topic_page, topic_href};
