//! Quiz document model
//!
//! The JSON shape consumed by the survey renderer. Field names are
//! serialized in camelCase and must not change.

use serde::{Deserialize, Serialize};

/// Default completion message template
pub const DEFAULT_COMPLETED_HTML: &str =
    "<h4>You got <b>{correctAnswers}</b> out of <b>{questionCount}</b> correct answers.</h4>";

/// The assembled quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDocument {
    /// Quiz title from the level 1 heading
    pub title: String,

    /// Where the renderer draws the progress bar
    pub show_progress_bar: ShowProgressBar,

    /// Whether the renderer offers a "previous" button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_prev_button: Option<bool>,

    /// One page per question
    pub pages: Vec<Page>,

    /// Message template shown after the last page
    pub completed_html: String,

    /// Messages that replace `completed_html` when their expression holds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completed_html_on_condition: Vec<CompletionCondition>,
}

impl QuizDocument {
    /// Number of question elements across all pages
    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    /// Iterate over every question element
    pub fn questions(&self) -> impl Iterator<Item = &RadioGroupElement> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter())
            .filter_map(|element| match element {
                Element::Radiogroup(question) => Some(question),
                Element::Html(_) => None,
            })
    }

    /// Every element name in the document
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter())
            .map(Element::name)
    }
}

/// Progress bar placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowProgressBar {
    /// No progress bar
    Off,
    /// Above the questions
    Top,
    /// Below the questions
    #[default]
    Bottom,
    /// Above and below
    Both,
    /// Renderer decides
    Auto,
}

/// A conditional completion message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCondition {
    /// Renderer expression, e.g. `{correctAnswers} == 0`
    pub expression: String,

    /// HTML shown when the expression holds
    pub html: String,
}

/// One page of the quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Optional meta element followed by the question element
    pub elements: Vec<Element>,
}

/// A page element, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Raw markup shown verbatim
    Html(HtmlElement),

    /// A single-choice question
    Radiogroup(RadioGroupElement),
}

impl Element {
    /// The element's unique name
    pub fn name(&self) -> &str {
        match self {
            Element::Html(html) => &html.name,
            Element::Radiogroup(question) => &question.name,
        }
    }
}

/// Raw markup element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlElement {
    /// Unique element name
    pub name: String,

    /// Markup to display
    pub html: String,
}

/// Single-choice question element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioGroupElement {
    /// Unique element name
    pub name: String,

    /// Question title
    pub title: String,

    /// Question description
    pub description: String,

    /// Choice labels
    pub choices: Vec<String>,

    /// Labels of the correct choices
    pub correct_answer: Vec<String>,

    /// Choice display order applied by the renderer
    pub choices_order: ChoicesOrder,

    /// Visibility expression; the question stays enabled while unanswered
    pub enable_if: String,

    /// Whether an answer is required to move on
    pub is_required: bool,
}

/// Choice display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoicesOrder {
    /// Document order
    None,
    /// Ascending by label
    Asc,
    /// Descending by label
    Desc,
    /// Shuffled at render time
    #[default]
    Random,
}

/// Expression enabling an element only while its answer is empty
pub fn unanswered_expression(name: &str) -> String {
    format!("{{{}}} empty", name)
}
