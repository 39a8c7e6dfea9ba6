use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

use crate::parsing::{Document, parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

/// One worked approach to the topic's problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approach {
    pub name: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub complexity: Option<Complexity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// The per-topic content record a detail panel is populated from.
///
/// Text-bearing fields hold loosely formatted content for [`parse`].
/// `diagram` is opaque markup and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub approaches: Vec<Approach>,
    #[serde(default)]
    pub key_points: Vec<KeyPoint>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
    #[serde(default)]
    pub tutorial_steps: Vec<TutorialStep>,
    #[serde(default)]
    pub diagram: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Description,
    Approach,
    Complexity,
    KeyPoint,
    Pitfalls,
    TutorialStep,
}

impl FieldKind {
    /// Stable lowercase name, used for CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Description => "description",
            FieldKind::Approach => "approach",
            FieldKind::Complexity => "complexity",
            FieldKind::KeyPoint => "key-point",
            FieldKind::Pitfalls => "pitfalls",
            FieldKind::TutorialStep => "tutorial-step",
        }
    }
}

/// A text-bearing field of a record, ready to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField<'a> {
    pub kind: FieldKind,
    pub heading: String,
    pub text: Cow<'a, str>,
}

/// A text field after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub kind: FieldKind,
    pub heading: String,
    pub document: Document,
}

impl TopicRecord {
    /// Every text-bearing field in display order. Empty fields are skipped.
    ///
    /// Complexity notes and pitfalls are folded into list-formatted text so
    /// they go through the same parser as everything else.
    pub fn text_fields<'a>(&'a self) -> Vec<TextField<'a>> {
        let mut fields = vec![];
        let mut push = |kind: FieldKind, heading: String, text: Cow<'a, str>| {
            if !text.trim().is_empty() {
                fields.push(TextField {
                    kind,
                    heading,
                    text,
                });
            }
        };

        push(
            FieldKind::Description,
            "Description".to_string(),
            Cow::Borrowed(self.description.as_str()),
        );

        for approach in &self.approaches {
            push(
                FieldKind::Approach,
                approach.name.clone(),
                Cow::Borrowed(approach.explanation.as_str()),
            );
            if let Some(c) = &approach.complexity {
                push(
                    FieldKind::Complexity,
                    format!("{} complexity", approach.name),
                    Cow::Owned(format!("- Time: {}\n- Space: {}", c.time, c.space)),
                );
            }
        }

        for point in &self.key_points {
            push(
                FieldKind::KeyPoint,
                point.title.clone(),
                Cow::Borrowed(point.description.as_str()),
            );
        }

        if !self.pitfalls.is_empty() {
            let text = self
                .pitfalls
                .iter()
                .map(|p| format!("- {p}"))
                .collect::<Vec<_>>()
                .join("\n");
            push(FieldKind::Pitfalls, "Pitfalls".to_string(), Cow::Owned(text));
        }

        for (i, step) in self.tutorial_steps.iter().enumerate() {
            push(
                FieldKind::TutorialStep,
                format!("Step {}: {}", i + 1, step.title),
                Cow::Borrowed(step.body.as_str()),
            );
        }

        fields
    }

    /// Parses every text field.
    pub fn parsed(&self) -> Vec<ParsedField> {
        self.text_fields()
            .into_iter()
            .map(|field| ParsedField {
                kind: field.kind,
                heading: field.heading,
                document: parse(&field.text),
            })
            .collect()
    }

    /// Diagram markup exactly as stored.
    pub fn diagram(&self) -> Option<&str> {
        self.diagram.as_deref()
    }
}
