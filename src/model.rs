use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is to prepare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single instruction, possibly expanded into sub-instructions.
///
/// In JSON a leaf is a bare string and a branch is an object with
/// `text` and `substeps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Branch { text: String, substeps: Vec<Step> },
}

impl Step {
    pub fn leaf(text: impl Into<String>) -> Self {
        Step::Leaf(text.into())
    }

    pub fn branch(text: impl Into<String>, substeps: Vec<Step>) -> Self {
        Step::Branch {
            text: text.into(),
            substeps,
        }
    }

    /// Instruction text of this step (the label for a branch)
    pub fn text(&self) -> &str {
        match self {
            Step::Leaf(text) => text,
            Step::Branch { text, .. } => text,
        }
    }

    /// Nesting depth: 1 for a leaf, 1 + deepest child for a branch
    pub fn depth(&self) -> usize {
        match self {
            Step::Leaf(_) => 1,
            Step::Branch { substeps, .. } => {
                1 + substeps.iter().map(Step::depth).max().unwrap_or(0)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    /// Preparation time in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    pub description: String,
    /// Older datasets carry no ingredient list at all
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
