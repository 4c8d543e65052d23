//! Error types for question validation

use thiserror::Error;

/// Title shown in error messages when a question has no heading text
pub const UNTITLED_QUESTION: &str = "(untitled)";

/// Which required field of a question is missing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The level 2 heading has no text
    #[error("question has no title")]
    EmptyTitle,

    /// No blockquote, or an empty one
    #[error("question has no description (add a `>` blockquote below the heading)")]
    EmptyDescription,

    /// No unordered list, or an empty one
    #[error("question has no choices (add a `- [ ]` list)")]
    NoChoices,

    /// No list item is checked
    #[error("question has no correct answer (mark one choice with `- [x]`)")]
    NoCorrectAnswer,
}

/// A question failed one of the required-field checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Question {position} '{question_title}': {kind}")]
pub struct ValidationError {
    /// The failed check
    pub kind: ValidationErrorKind,

    /// Title of the offending question, or [`UNTITLED_QUESTION`]
    pub question_title: String,

    /// 1-based position of the question in the source document
    pub position: usize,
}

/// Why a question cannot be expressed as a single-choice question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// More than one checked item implies a multi-select question
    #[error("{0} choices are marked correct, but only one is supported")]
    MultipleCorrectAnswers(usize),

    /// Answers are matched by label, so labels must be distinct
    #[error("choice '{0}' appears more than once")]
    DuplicateChoice(String),

    /// A list item with no text
    #[error("a choice has an empty label")]
    BlankChoice,
}

/// Errors that can occur while turning a section into a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceModelError {
    /// A required field is missing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The question shape is outside what the quiz format supports
    #[error("Question {position} '{question_title}' is not a single-choice question: {reason}")]
    UnsupportedQuestionType {
        /// Title of the offending question
        question_title: String,
        /// 1-based position of the question in the source document
        position: usize,
        /// What made the question unsupported
        reason: UnsupportedReason,
    },
}

impl SourceModelError {
    /// The validation failure kind, if this is a validation error
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self {
            SourceModelError::Validation(e) => Some(e.kind),
            SourceModelError::UnsupportedQuestionType { .. } => None,
        }
    }
}
