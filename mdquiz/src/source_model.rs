//! Source model for the parsing stage
//!
//! This module turns raw markdown into validated questions:
//! 1. **Normalizing**: group top-level blocks into one section per question
//! 2. **Section parsing**: classify each section's blocks into a draft
//! 3. **Validation**: check every draft has the fields a question needs

// Submodules
mod blocks;
mod error;
mod parser;
mod question;
mod quiz_source;
mod section_parser;

// Re-export public types
pub use blocks::{Choice, QuizBlock};
pub use error::{
    SourceModelError, UnsupportedReason, ValidationError, ValidationErrorKind, UNTITLED_QUESTION,
};
pub use parser::MarkdownParser;
pub use question::{validate, Question, QuestionDraft};
pub use quiz_source::{QuizSource, Section};
pub use section_parser::parse_section;

/// Convert markdown into a sectioned quiz source
///
/// # Parameters
/// * `markdown` - Raw markdown text
///
/// # Returns
/// * `QuizSource` - Title and question sections
pub fn normalize(markdown: &str) -> QuizSource {
    QuizSource::parse(markdown)
}

impl QuizSource {
    /// Parse and validate every section
    ///
    /// Fails on the first invalid section; no partial list is returned.
    ///
    /// # Returns
    /// * `Ok(Vec<Question>)` - One question per section, in document order
    /// * `Err(SourceModelError)` - The first section that failed validation
    pub fn questions(&self) -> Result<Vec<Question>, SourceModelError> {
        self.sections
            .iter()
            .map(|section| validate(parse_section(section)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_in_document_order() {
        let markdown = "# T\n\n## A\n> a\n- [x] 1\n\n## B\n> b\n- [ ] 1\n- [x] 2\n";

        let questions = normalize(markdown).questions().unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].title(), "A");
        assert_eq!(questions[1].title(), "B");
        assert_eq!(questions[1].correct_answers(), ["2"]);
    }

    #[test]
    fn test_first_invalid_section_fails_whole_document() {
        let markdown = "## A\n> a\n- [x] 1\n\n## B\n> b\n\n## C\n";

        let err = normalize(markdown).questions().unwrap_err();

        match err {
            SourceModelError::Validation(e) => {
                assert_eq!(e.kind, ValidationErrorKind::NoChoices);
                assert_eq!(e.question_title, "B");
                assert_eq!(e.position, 2);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
