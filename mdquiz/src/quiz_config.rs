//! Quiz configuration from quiz.toml

use crate::quiz_document::{CompletionCondition, ShowProgressBar, DEFAULT_COMPLETED_HTML};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Envelope options applied to every compiled quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Progress bar placement
    pub show_progress_bar: ShowProgressBar,

    /// Whether to offer a "previous" button; omitted from the output when unset
    pub show_prev_button: Option<bool>,

    /// Completion message template
    pub completed_html: String,

    /// Conditional completion messages, checked before `completed_html`
    pub completed_html_on_condition: Vec<CompletionCondition>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            show_progress_bar: ShowProgressBar::Bottom,
            show_prev_button: None,
            completed_html: DEFAULT_COMPLETED_HTML.to_string(),
            completed_html_on_condition: Vec::new(),
        }
    }
}

impl QuizConfig {
    /// Load configuration from a quiz.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(QuizConfig)` - Successfully loaded configuration
    /// * `Err(QuizConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuizConfigError> {
        let content = fs::read_to_string(&path).map_err(QuizConfigError::IoError)?;

        let config: QuizConfig = toml::from_str(&content).map_err(QuizConfigError::ParseError)?;

        Ok(config)
    }
}

/// Errors that can occur when loading quiz configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum QuizConfigError {
    /// IO error when reading file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),
}

impl std::fmt::Display for QuizConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizConfigError::IoError(e) => write!(f, "IO error: {}", e),
            QuizConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for QuizConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizConfigError::IoError(e) => Some(e),
            QuizConfigError::ParseError(e) => Some(e),
        }
    }
}
