use std::collections::HashMap;

use prepdeck_engine::models::{ParsedField, TopicId, TopicTreeItem};
use prepdeck_engine::ContentRepository;
use ratatui::{text::Line, widgets::ListState};
use relative_path::RelativePathBuf;

use crate::view;

pub struct App {
    repo: ContentRepository,
    pub tree_items: Vec<TopicTreeItem>,
    pub topic_list_state: ListState,
    /// Parsed fields per topic, filled on first view.
    parsed: HashMap<TopicId, Vec<ParsedField>>,
    pub current_content: Vec<Line<'static>>,
}

impl App {
    pub fn new(repo: ContentRepository) -> Self {
        let tree_items = repo.tree().items();

        let mut app = Self {
            repo,
            tree_items,
            topic_list_state: ListState::default(),
            parsed: HashMap::new(),
            current_content: Vec::new(),
        };

        if !app.tree_items.is_empty() {
            app.topic_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    pub fn next_topic(&mut self) {
        if self.tree_items.is_empty() {
            return;
        }
        let i = match self.topic_list_state.selected() {
            Some(i) => (i + 1) % self.tree_items.len(),
            None => 0,
        };
        self.topic_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_topic(&mut self) {
        if self.tree_items.is_empty() {
            return;
        }
        let i = match self.topic_list_state.selected() {
            Some(0) | None => self.tree_items.len() - 1,
            Some(i) => i - 1,
        };
        self.topic_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn selected_item(&self) -> Option<&TopicTreeItem> {
        self.topic_list_state
            .selected()
            .and_then(|index| self.tree_items.get(index))
    }

    fn update_content_for_selection(&mut self) {
        let Some((topic, name)) = self
            .selected_item()
            .map(|item| (item.node.topic.clone(), item.node.name.clone()))
        else {
            return;
        };

        let Some(id) = topic else {
            self.current_content = view::category_lines(&name);
            return;
        };

        let Some(record) = self.repo.get(&id) else {
            log::warn!("Topic {id} is in the outline but has no record");
            self.current_content = vec![Line::from(format!("No content for {id}"))];
            return;
        };

        let fields = self.parsed.entry(id).or_insert_with_key(|id| {
            log::debug!("Parsing fields for {id}");
            record.parsed()
        });
        self.current_content = view::topic_lines(record, fields);
    }

    fn selected_category(&self) -> Option<(RelativePathBuf, bool)> {
        self.selected_item()
            .filter(|item| item.node.is_category())
            .map(|item| (item.node.path.clone(), item.node.is_expanded))
    }

    pub fn toggle_selected_category(&mut self) {
        if let Some((path, _)) = self.selected_category() {
            self.repo.tree_mut().toggle(&path);
            self.refresh_tree();
        }
    }

    pub fn expand_selected_category(&mut self) {
        if let Some((path, false)) = self.selected_category() {
            self.repo.tree_mut().expand(&path);
            self.refresh_tree();
        }
    }

    pub fn collapse_selected_category(&mut self) {
        if let Some((path, true)) = self.selected_category() {
            self.repo.tree_mut().collapse(&path);
            self.refresh_tree();
        }
    }

    fn refresh_tree(&mut self) {
        self.tree_items = self.repo.tree().items();
        self.update_content_for_selection();
    }

    #[cfg(test)]
    fn cached_topics(&self) -> usize {
        self.parsed.len()
    }
}
