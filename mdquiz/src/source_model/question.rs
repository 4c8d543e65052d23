//! Question drafts and validated questions

use super::blocks::Choice;
use super::error::{
    SourceModelError, UnsupportedReason, ValidationError, ValidationErrorKind, UNTITLED_QUESTION,
};
use itertools::Itertools;

/// An in-progress, unvalidated question built while scanning one section
///
/// Description and choices follow last-write-wins semantics. The draft
/// remembers whether each was already set so an overwrite can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    /// 1-based position of the source section
    pub position: usize,

    /// Heading text
    pub title: String,

    /// Blockquote text
    pub description: String,

    /// Choice labels in document order
    pub choices: Vec<String>,

    /// Labels of the checked choices, in document order
    pub correct_answers: Vec<String>,

    /// Rendered HTML of every block that is not a question field
    pub meta: String,

    seen_description: bool,
    seen_choices: bool,
}

impl QuestionDraft {
    /// Start a draft for a section
    ///
    /// # Parameters
    /// * `title` - Heading text of the section
    /// * `position` - 1-based position of the section in the document
    pub fn new(title: impl Into<String>, position: usize) -> Self {
        Self {
            position,
            title: title.into().trim().to_string(),
            ..Default::default()
        }
    }

    /// Set the description, replacing any earlier one
    pub fn set_description(&mut self, text: &str) {
        if self.seen_description {
            log::warn!(
                "Question {} '{}': later blockquote replaces the earlier description",
                self.position,
                self.display_title()
            );
        }
        self.seen_description = true;
        self.description = text.trim().to_string();
    }

    /// Set choices and correct answers from a list, replacing any earlier list
    pub fn set_choices(&mut self, choices: &[Choice]) {
        if self.seen_choices {
            log::warn!(
                "Question {} '{}': later list replaces the earlier choices",
                self.position,
                self.display_title()
            );
        }
        self.seen_choices = true;
        self.choices = choices.iter().map(|c| c.label.clone()).collect();
        self.correct_answers = choices
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.label.clone())
            .collect();
    }

    /// Append rendered HTML to the meta content
    pub fn push_meta(&mut self, html: &str) {
        self.meta.push_str(html);
    }

    /// Title for messages, with a placeholder when the heading is empty
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_QUESTION
        } else {
            &self.title
        }
    }

    /// Validate the draft into a question
    ///
    /// Checks run in order title, description, choices, correct answers;
    /// the first failure is returned. A question that passes those checks
    /// must also be expressible as single-choice.
    ///
    /// # Returns
    /// * `Ok(Question)` - All required fields present
    /// * `Err(SourceModelError)` - The first failed check
    pub fn validate(self) -> Result<Question, SourceModelError> {
        let kind = if self.title.is_empty() {
            Some(ValidationErrorKind::EmptyTitle)
        } else if self.description.is_empty() {
            Some(ValidationErrorKind::EmptyDescription)
        } else if self.choices.is_empty() {
            Some(ValidationErrorKind::NoChoices)
        } else if self.correct_answers.is_empty() {
            Some(ValidationErrorKind::NoCorrectAnswer)
        } else {
            None
        };

        if let Some(kind) = kind {
            return Err(ValidationError {
                kind,
                question_title: self.display_title().to_string(),
                position: self.position,
            }
            .into());
        }

        if let Some(reason) = self.unsupported_reason() {
            return Err(SourceModelError::UnsupportedQuestionType {
                question_title: self.title,
                position: self.position,
                reason,
            });
        }

        Ok(Question {
            title: self.title,
            description: self.description,
            choices: self.choices,
            correct_answers: self.correct_answers,
            meta: Some(self.meta).filter(|meta| !meta.is_empty()),
        })
    }

    /// Shapes the single-choice format cannot carry
    fn unsupported_reason(&self) -> Option<UnsupportedReason> {
        if self.choices.iter().any(|label| label.is_empty()) {
            return Some(UnsupportedReason::BlankChoice);
        }

        if let Some(label) = self.choices.iter().duplicates().next() {
            return Some(UnsupportedReason::DuplicateChoice(label.clone()));
        }

        if self.correct_answers.len() > 1 {
            return Some(UnsupportedReason::MultipleCorrectAnswers(
                self.correct_answers.len(),
            ));
        }

        None
    }
}

/// Validate a draft into a question
pub fn validate(draft: QuestionDraft) -> Result<Question, SourceModelError> {
    draft.validate()
}

/// A validated single-choice question
///
/// The title and description are non-empty, there is at least one choice,
/// labels are distinct, and the correct answers are a non-empty subset of
/// the choices by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    title: String,
    description: String,
    choices: Vec<String>,
    correct_answers: Vec<String>,
    meta: Option<String>,
}

impl Question {
    /// Heading text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Blockquote text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Choice labels in document order
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Labels of the correct choices
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    /// Rendered HTML shown alongside the question, if any
    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }
}
