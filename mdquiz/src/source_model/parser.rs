//! Markdown event stream parser
//!
//! Groups pulldown-cmark's event stream into top-level blocks and reduces
//! each group to one of the [`QuizBlock`] shapes.

use super::blocks::{Choice, QuizBlock};
use pulldown_cmark::{Event, Options, Tag, TagEnd};

/// Parser state for converting markdown events to top-level blocks
pub struct MarkdownParser<'a> {
    /// Nesting depth of the currently open tags
    depth: usize,

    /// Events of the top-level block being collected
    pending: Vec<Event<'a>>,

    /// Completed blocks
    blocks: Vec<QuizBlock>,
}

impl<'a> MarkdownParser<'a> {
    /// Create a new parser
    ///
    /// # Returns
    /// * `MarkdownParser` - A new parser with empty state
    pub fn new() -> Self {
        Self {
            depth: 0,
            pending: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Markdown extensions the quiz format relies on
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }

    /// Parse markdown content into top-level blocks
    ///
    /// # Parameters
    /// * `content` - Raw markdown content to parse
    ///
    /// # Returns
    /// * `Vec<QuizBlock>` - Top-level blocks in document order
    pub fn parse(content: &'a str) -> Vec<QuizBlock> {
        let mut parser = Self::new();
        let md_parser = pulldown_cmark::Parser::new_ext(content, Self::options());

        for event in md_parser {
            parser.process_event(event);
        }

        parser.finalize();

        parser.blocks
    }

    /// Process a single markdown event
    fn process_event(&mut self, event: Event<'a>) {
        match &event {
            Event::Start(_) => self.depth += 1,
            Event::End(_) => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }

        self.pending.push(event);

        if self.depth == 0 {
            self.finish_block();
        }
    }

    /// Classify the collected events of one top-level block
    fn finish_block(&mut self) {
        let events = std::mem::take(&mut self.pending);

        let block = match events.first() {
            None => return,
            Some(Event::Start(Tag::Heading { level, .. })) if (*level as usize) <= 2 => {
                QuizBlock::Heading {
                    level: *level as usize,
                    text: text_content(&events),
                }
            }
            Some(Event::Start(Tag::BlockQuote(_))) => QuizBlock::Quote(text_content(&events)),
            Some(Event::Start(Tag::List(None))) => QuizBlock::List(collect_choices(&events)),
            Some(_) => QuizBlock::Other(render_html(&events)),
        };

        self.blocks.push(block);
    }

    /// Finalize parsing
    fn finalize(&mut self) {
        // An unbalanced tail can only come from a truncated event stream
        if !self.pending.is_empty() {
            self.finish_block();
        }
    }
}

impl Default for MarkdownParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates the plain text of a run of events, the way a DOM's
/// `textContent` would read it
#[derive(Default)]
struct TextContent {
    text: String,
    image_depth: usize,
}

impl TextContent {
    fn push(&mut self, event: &Event<'_>) {
        match event {
            Event::Start(Tag::Image { .. }) => self.image_depth += 1,
            Event::End(TagEnd::Image) => self.image_depth = self.image_depth.saturating_sub(1),
            // Alt text is an attribute once rendered, not content
            _ if self.image_depth > 0 => {}
            Event::Text(text)
            | Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => self.text.push_str(text),
            Event::SoftBreak | Event::HardBreak | Event::Start(Tag::List(_)) => {
                self.text.push('\n')
            }
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => self.text.push('\n'),
            _ => {}
        }
    }

    fn finish(self) -> String {
        self.text.trim().to_string()
    }
}

/// Trimmed plain text of a block
fn text_content(events: &[Event<'_>]) -> String {
    let mut content = TextContent::default();
    for event in events {
        content.push(event);
    }
    content.finish()
}

/// Collect the top-level items of an unordered list as choices
///
/// Text of nested lists is folded into the label of the item that owns
/// them. Only a task marker that belongs to the item itself counts.
fn collect_choices(events: &[Event<'_>]) -> Vec<Choice> {
    let mut choices = Vec::new();
    let mut list_depth = 0usize;
    let mut current: Option<(TextContent, bool)> = None;

    for event in events {
        match event {
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),
            Event::Start(Tag::Item) if list_depth == 1 => {
                current = Some((TextContent::default(), false));
                continue;
            }
            Event::End(TagEnd::Item) if list_depth == 1 => {
                if let Some((label, checked)) = current.take() {
                    choices.push(Choice::new(label.finish(), checked));
                }
                continue;
            }
            Event::TaskListMarker(checked) if list_depth == 1 => {
                if let Some((_, item_checked)) = current.as_mut() {
                    *item_checked = *checked;
                }
                continue;
            }
            _ => {}
        }

        if let Some((label, _)) = current.as_mut() {
            label.push(event);
        }
    }

    choices
}

/// Render a block back to HTML
fn render_html(events: &[Event<'_>]) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.iter().cloned());
    html
}
