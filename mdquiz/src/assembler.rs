//! Quiz assembly
//!
//! Shuffles validated questions into pages and wraps them in the document
//! envelope. All randomness comes from the caller's generator, so a seeded
//! generator gives reproducible output.

use crate::quiz_config::QuizConfig;
use crate::quiz_document::{
    unanswered_expression, ChoicesOrder, Element, HtmlElement, Page, QuizDocument,
    RadioGroupElement,
};
use crate::source_model::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Prefix of generated names for meta elements
const META_NAME_PREFIX: &str = "meta";

/// Hands out random UUID names, never the same one twice
struct NameGenerator<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    issued: HashSet<String>,
}

impl<'r, R: Rng + ?Sized> NameGenerator<'r, R> {
    fn new(rng: &'r mut R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Next unused name, optionally prefixed
    fn next(&mut self, prefix: &str) -> String {
        loop {
            let uuid = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
            let name = format!("{}{}", prefix, uuid.hyphenated());
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }
}

/// Assemble questions into a quiz document
///
/// Questions are put in a uniformly random order, one page each. Choice
/// order is left to the renderer through `choicesOrder: "random"`.
///
/// # Parameters
/// * `title` - Quiz title
/// * `questions` - Validated questions in document order
/// * `config` - Envelope options
/// * `rng` - Source of randomness for ordering and names
///
/// # Returns
/// * `QuizDocument` - The assembled quiz
pub fn assemble<R: Rng + ?Sized>(
    title: &str,
    mut questions: Vec<Question>,
    config: &QuizConfig,
    rng: &mut R,
) -> QuizDocument {
    questions.shuffle(rng);

    let mut names = NameGenerator::new(rng);
    let pages = questions
        .iter()
        .map(|question| question_page(question, &mut names))
        .collect();

    QuizDocument {
        title: title.to_string(),
        show_progress_bar: config.show_progress_bar,
        show_prev_button: config.show_prev_button,
        pages,
        completed_html: config.completed_html.clone(),
        completed_html_on_condition: config.completed_html_on_condition.clone(),
    }
}

/// Build the page for one question
fn question_page<R: Rng + ?Sized>(question: &Question, names: &mut NameGenerator<'_, R>) -> Page {
    let mut elements = Vec::with_capacity(2);

    if let Some(meta) = question.meta() {
        elements.push(Element::Html(HtmlElement {
            name: names.next(META_NAME_PREFIX),
            html: meta.to_string(),
        }));
    }

    let name = names.next("");
    elements.push(Element::Radiogroup(RadioGroupElement {
        enable_if: unanswered_expression(&name),
        name,
        title: question.title().to_string(),
        description: question.description().to_string(),
        choices: question.choices().to_vec(),
        correct_answer: question.correct_answers().to_vec(),
        choices_order: ChoicesOrder::Random,
        is_required: true,
    }));

    Page { elements }
}

/// Whether a string is a generated element name
pub fn is_generated_name(name: &str) -> bool {
    let uuid = name.strip_prefix(META_NAME_PREFIX).unwrap_or(name);
    Uuid::parse_str(uuid).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::normalize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn questions(markdown: &str) -> Vec<Question> {
        normalize(markdown).questions().unwrap()
    }

    const THREE_QUESTIONS: &str = "# T\n\n## A\n> a\n- [x] 1\n- [ ] 2\n\n## B\n> b\n- [x] 1\n\n![img](b.png)\n\n## C\n> c\n- [ ] 1\n- [x] 2\n";

    #[test]
    fn test_pages_are_a_permutation_of_questions() {
        let mut rng = StdRng::seed_from_u64(7);

        let document = assemble("T", questions(THREE_QUESTIONS), &QuizConfig::default(), &mut rng);

        assert_eq!(document.pages.len(), 3);
        let titles: BTreeSet<&str> = document.questions().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, BTreeSet::from(["A", "B", "C"]));
    }

    #[test]
    fn test_same_seed_same_document() {
        let config = QuizConfig::default();

        let first = assemble("T", questions(THREE_QUESTIONS), &config, &mut StdRng::seed_from_u64(42));
        let second = assemble("T", questions(THREE_QUESTIONS), &config, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_question_element_fields() {
        let mut rng = StdRng::seed_from_u64(1);

        let document = assemble(
            "T",
            questions("## Q1\n> d1\n- [x] a\n- [ ] b\n"),
            &QuizConfig::default(),
            &mut rng,
        );

        let question = document.questions().next().unwrap();
        assert!(is_generated_name(&question.name));
        assert_eq!(question.enable_if, format!("{{{}}} empty", question.name));
        assert_eq!(question.choices, vec!["a", "b"]);
        assert_eq!(question.correct_answer, vec!["a"]);
        assert_eq!(question.choices_order, ChoicesOrder::Random);
        assert!(question.is_required);
    }

    #[test]
    fn test_meta_element_precedes_question() {
        let mut rng = StdRng::seed_from_u64(3);

        let document = assemble("T", questions(THREE_QUESTIONS), &QuizConfig::default(), &mut rng);

        let page = document
            .pages
            .iter()
            .find(|page| page.elements.len() == 2)
            .unwrap();
        match (&page.elements[0], &page.elements[1]) {
            (Element::Html(meta), Element::Radiogroup(question)) => {
                assert!(meta.name.starts_with(META_NAME_PREFIX));
                assert!(is_generated_name(&meta.name));
                assert!(meta.html.contains(r#"<img src="b.png" alt="img" />"#));
                assert_eq!(question.title, "B");
            }
            other => panic!("Expected html then radiogroup, got {:?}", other),
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut rng = StdRng::seed_from_u64(11);

        let document = assemble("T", questions(THREE_QUESTIONS), &QuizConfig::default(), &mut rng);

        let names: Vec<&str> = document.element_names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), 4);
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_envelope_comes_from_config() {
        let config = QuizConfig {
            show_prev_button: Some(false),
            completed_html: "<p>done</p>".to_string(),
            ..QuizConfig::default()
        };

        let document = assemble("Quiz", Vec::new(), &config, &mut StdRng::seed_from_u64(0));

        assert_eq!(document.title, "Quiz");
        assert!(document.pages.is_empty());
        assert_eq!(document.show_prev_button, Some(false));
        assert_eq!(document.completed_html, "<p>done</p>");
    }

    #[test]
    fn test_is_generated_name() {
        assert!(is_generated_name("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_generated_name("meta67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!is_generated_name("question-1"));
    }
}
