//! Quiz source document representation

use super::blocks::QuizBlock;
use super::parser::MarkdownParser;

/// A markdown quiz document split into question sections
#[derive(Debug, Clone, Default)]
pub struct QuizSource {
    /// Text of the first level 1 heading, empty when there is none
    pub title: String,

    /// Question sections in document order
    pub sections: Vec<Section>,

    /// Blocks that belong to no section and were discarded
    pub dropped: Vec<QuizBlock>,
}

impl QuizSource {
    /// Parse markdown content into a quiz source
    ///
    /// # Parameters
    /// * `content` - Raw markdown content
    ///
    /// # Returns
    /// * `QuizSource` - Title plus one section per level 2 heading
    pub fn parse(content: &str) -> Self {
        Self::from_blocks(MarkdownParser::parse(content))
    }

    /// Group top-level blocks into sections
    ///
    /// A section starts at a level 2 heading and runs up to the next level 1
    /// or level 2 heading. The first level 1 heading supplies the title.
    /// Anything outside a section is moved to `dropped`.
    ///
    /// # Parameters
    /// * `blocks` - Top-level blocks in document order
    ///
    /// # Returns
    /// * `QuizSource` - The grouped document
    pub fn from_blocks(blocks: Vec<QuizBlock>) -> Self {
        let mut source = Self::default();
        let mut title: Option<String> = None;
        let mut current: Option<Section> = None;

        for block in blocks {
            match block {
                QuizBlock::Heading { level: 1, text } => {
                    source.sections.extend(current.take());
                    if title.is_none() {
                        title = Some(text);
                    } else {
                        log::warn!("Ignoring extra level 1 heading '{}'", text);
                    }
                }
                QuizBlock::Heading { level: 2, text } => {
                    source.sections.extend(current.take());
                    let position = source.sections.len() + 1;
                    current = Some(Section::new(text, position));
                }
                other => match current.as_mut() {
                    Some(section) => section.content.push(other),
                    None => source.dropped.push(other),
                },
            }
        }

        source.sections.extend(current);
        source.title = title.unwrap_or_default();

        if !source.dropped.is_empty() {
            log::warn!(
                "Dropped {} block(s) outside of any question section",
                source.dropped.len()
            );
        }

        source
    }
}

/// One question section, from its level 2 heading up to the next heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Text content of the level 2 heading
    pub heading_text: String,

    /// 1-based position of the section in the document
    pub position: usize,

    /// Blocks following the heading
    pub content: Vec<QuizBlock>,
}

impl Section {
    /// Create an empty section for a heading
    pub fn new(heading_text: impl Into<String>, position: usize) -> Self {
        Self {
            heading_text: heading_text.into(),
            position,
            content: Vec::new(),
        }
    }
}
