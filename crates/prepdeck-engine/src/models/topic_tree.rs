use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use relative_path::{RelativePath, RelativePathBuf};

use super::topic_id::{TopicId, humanize};

#[derive(Debug, Clone, PartialEq)]
pub struct TopicNode {
    /// Display name: the record title for topics, a humanized segment for categories.
    pub name: String,
    /// Category path, or the topic id's path for leaves.
    pub path: RelativePathBuf,
    /// The record shown for this node. A category carries one when a record
    /// shares its name, e.g. `arrays.toml` next to `arrays/`.
    pub topic: Option<TopicId>,
    pub is_expanded: bool,
    pub children: BTreeMap<String, TopicNode>,
}

impl TopicNode {
    pub fn new_category(name: String, path: RelativePathBuf) -> Self {
        Self {
            name,
            path,
            topic: None,
            is_expanded: false,
            children: BTreeMap::new(),
        }
    }

    pub fn new_topic(name: String, id: TopicId) -> Self {
        Self {
            name,
            path: id.as_relative_path().to_relative_path_buf(),
            topic: Some(id),
            is_expanded: false,
            children: BTreeMap::new(),
        }
    }

    pub fn is_category(&self) -> bool {
        self.topic.is_none() || !self.children.is_empty()
    }

    fn insert_topic(&mut self, segments: &[&str], id: TopicId, title: String) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        if rest.is_empty() {
            match self.children.entry(first.to_string()) {
                Entry::Occupied(mut entry) => {
                    let node = entry.get_mut();
                    node.name = title;
                    node.topic = Some(id);
                }
                Entry::Vacant(entry) => {
                    entry.insert(TopicNode::new_topic(title, id));
                }
            }
            return;
        }

        // An existing leaf of the same name has the same path and becomes the category
        let category_path = self.path.join(first);
        self.children
            .entry(first.to_string())
            .or_insert_with(|| TopicNode::new_category(humanize(first), category_path))
            .insert_topic(rest, id, title);
    }

    fn find_mut(&mut self, path: &RelativePath) -> Option<&mut TopicNode> {
        if self.path == path {
            return Some(self);
        }
        self.children
            .values_mut()
            .find_map(|child| child.find_mut(path))
    }

    pub fn find(&self, path: &RelativePath) -> Option<&TopicNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.values().find_map(|child| child.find(path))
    }

    /// Children ordered categories first, then topics, each case-insensitively by name.
    pub fn sorted_children(&self) -> Vec<&TopicNode> {
        let mut sorted: Vec<_> = self.children.values().collect();
        sorted.sort_by(|a, b| match (a.is_category(), b.is_category()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });
        sorted
    }

    pub fn get_flattened_items(&self, depth: usize) -> Vec<TopicTreeItem> {
        let mut items = vec![TopicTreeItem {
            node: self.clone(),
            depth,
        }];

        if self.is_expanded {
            for child in self.sorted_children() {
                items.extend(child.get_flattened_items(depth + 1));
            }
        }

        items
    }
}

/// One visible row of the flattened outline.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicTreeItem {
    pub node: TopicNode,
    pub depth: usize,
}

/// Expandable outline of categories and topics.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicTree {
    pub root: TopicNode,
}

impl TopicTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut root = TopicNode::new_category(root_name.into(), RelativePathBuf::new());
        root.is_expanded = true; // Root should always be expanded
        Self { root }
    }

    /// Builds a tree from topic ids and their display titles.
    pub fn build(
        root_name: impl Into<String>,
        topics: impl IntoIterator<Item = (TopicId, String)>,
    ) -> Self {
        let mut tree = Self::new(root_name);
        for (id, title) in topics {
            let segments: Vec<&str> = id.as_str().split('/').filter(|s| !s.is_empty()).collect();
            tree.root.insert_topic(&segments, id.clone(), title);
        }
        tree
    }

    /// Builds a tree using each id's fallback title.
    pub fn build_from_ids(
        root_name: impl Into<String>,
        ids: impl IntoIterator<Item = TopicId>,
    ) -> Self {
        Self::build(
            root_name,
            ids.into_iter().map(|id| {
                let title = id.fallback_title();
                (id, title)
            }),
        )
    }

    /// Toggles a category's expanded state. Returns false if no such node exists.
    pub fn toggle(&mut self, path: &RelativePath) -> bool {
        match self.root.find_mut(path) {
            Some(node) => {
                node.is_expanded = !node.is_expanded;
                true
            }
            None => false,
        }
    }

    pub fn expand(&mut self, path: &RelativePath) -> bool {
        self.set_expanded(path, true)
    }

    pub fn collapse(&mut self, path: &RelativePath) -> bool {
        self.set_expanded(path, false)
    }

    fn set_expanded(&mut self, path: &RelativePath, expanded: bool) -> bool {
        match self.root.find_mut(path) {
            Some(node) => {
                node.is_expanded = expanded;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, path: &RelativePath) -> Option<&TopicNode> {
        self.root.find(path)
    }

    /// The visible outline, root first.
    pub fn items(&self) -> Vec<TopicTreeItem> {
        self.root.get_flattened_items(0)
    }
}
