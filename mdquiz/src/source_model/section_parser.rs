//! Section to question draft classification

use super::blocks::QuizBlock;
use super::question::QuestionDraft;
use super::quiz_source::Section;

/// Classify the blocks of a section into question fields
///
/// The heading becomes the title, a blockquote the description and an
/// unordered list the choices. Every other block is appended to the meta
/// HTML in document order.
///
/// # Parameters
/// * `section` - The section to scan
///
/// # Returns
/// * `QuestionDraft` - The unvalidated question
pub fn parse_section(section: &Section) -> QuestionDraft {
    let mut draft = QuestionDraft::new(&section.heading_text, section.position);

    for block in &section.content {
        match block {
            QuizBlock::Heading { text, .. } => {
                // Sections never contain h1/h2; keep the text rather than lose it
                draft.push_meta(&format!("<p>{}</p>\n", escape_html(text)));
            }
            QuizBlock::Quote(text) => draft.set_description(text),
            QuizBlock::List(choices) => draft.set_choices(choices),
            QuizBlock::Other(html) => draft.push_meta(html),
        }
    }

    draft
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::blocks::Choice;
    use crate::source_model::quiz_source::QuizSource;

    fn first_draft(markdown: &str) -> QuestionDraft {
        let source = QuizSource::parse(markdown);
        parse_section(&source.sections[0])
    }

    #[test]
    fn test_parse_standard_section() {
        // Arrange: Heading, description and task list
        let markdown = "# T\n\n## Q1\n> d1\n- [x] a\n- [ ] b\n";

        // Act: Classify the section
        let draft = first_draft(markdown);

        // Assert: Every field filled, no meta
        assert_eq!(draft.title, "Q1");
        assert_eq!(draft.description, "d1");
        assert_eq!(draft.choices, vec!["a", "b"]);
        assert_eq!(draft.correct_answers, vec!["a"]);
        assert_eq!(draft.meta, "");
    }

    #[test]
    fn test_other_blocks_accumulate_as_meta() {
        // Arrange: Image and code block around the standard fields
        let markdown = "## Q\n\n![chart](chart.png)\n\n> d\n\n- [x] a\n\n```\nlet x = 1;\n```\n";

        // Act: Classify the section
        let draft = first_draft(markdown);

        // Assert: Both blocks kept in order
        assert!(draft.meta.contains(r#"<img src="chart.png" alt="chart" />"#));
        assert!(draft.meta.contains("let x = 1;"));
        let image_at = draft.meta.find("<img").unwrap();
        let code_at = draft.meta.find("<pre>").unwrap();
        assert!(image_at < code_at);
    }

    #[test]
    fn test_last_blockquote_wins() {
        // Arrange: Two blockquotes
        let markdown = "## Q\n> first\n\n> second\n";

        // Act: Classify the section
        let draft = first_draft(markdown);

        // Assert: Later description replaces the earlier one
        assert_eq!(draft.description, "second");
    }

    #[test]
    fn test_no_list_leaves_choices_empty() {
        // Arrange: Heading and blockquote only
        let markdown = "## Q\n> d\n";

        // Act: Classify the section
        let draft = first_draft(markdown);

        // Assert: Nothing to choose from
        assert!(draft.choices.is_empty());
        assert!(draft.correct_answers.is_empty());
    }

    #[test]
    fn test_stray_heading_block_kept_as_meta() {
        // Arrange: Hand-built section containing a heading block
        let mut section = Section::new("Q", 1);
        section.content.push(QuizBlock::Heading {
            level: 2,
            text: "a < b".to_string(),
        });
        section
            .content
            .push(QuizBlock::List(vec![Choice::new("a", true)]));

        // Act: Classify the section
        let draft = parse_section(&section);

        // Assert: Heading text escaped into meta
        assert_eq!(draft.meta, "<p>a &lt; b</p>\n");
        assert_eq!(draft.choices, vec!["a"]);
    }
}
