pub mod topic;
pub mod topic_id;
pub mod topic_tree;

pub use topic::*;
pub use topic_id::{TopicId, humanize};
pub use topic_tree::*;
