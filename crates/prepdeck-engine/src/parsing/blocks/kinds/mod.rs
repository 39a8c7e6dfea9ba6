pub mod code_fence;
pub mod list_marker;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceBody};
pub use list_marker::{ListMarker, ListMatch};
pub use paragraph::Paragraph;
