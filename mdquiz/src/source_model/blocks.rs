//! Top-level markdown blocks
//!
//! This module defines the closed set of block shapes the quiz compiler
//! cares about. Everything that is not a heading, a blockquote or an
//! unordered list is kept as pre-rendered HTML so it can be shown verbatim.

/// A top-level markdown block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizBlock {
    /// A level 1 or level 2 heading
    Heading {
        /// Heading level (1 = h1, 2 = h2)
        level: usize,
        /// Plain text content of the heading
        text: String,
    },

    /// A block quote, reduced to its plain text content
    Quote(String),

    /// An unordered list, one entry per top-level item
    List(Vec<Choice>),

    /// Any other block, rendered back to HTML
    ///
    /// Covers paragraphs, images, code blocks, tables, ordered lists,
    /// rules, raw HTML and headings of level 3 and deeper.
    Other(String),
}

/// A single item of an unordered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Trimmed text content of the item
    pub label: String,

    /// Whether the item carries a checked task list marker (`- [x]`)
    pub checked: bool,
}

impl Choice {
    /// Create a new choice
    ///
    /// # Parameters
    /// * `label` - Text content of the list item
    /// * `checked` - Whether the task marker is checked
    ///
    /// # Returns
    /// * `Choice` - A new choice with a trimmed label
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into().trim().to_string(),
            checked,
        }
    }
}

impl QuizBlock {
    /// Returns the heading level if this block is a heading
    pub fn heading_level(&self) -> Option<usize> {
        match self {
            QuizBlock::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }
}
