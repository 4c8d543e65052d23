//! Quiz compilation pipeline
//!
//! This module orchestrates the stages of quiz compilation:
//! 1. **Reading**: Load the markdown source document
//! 2. **Parsing**: Normalize into sections and validate every question
//! 3. **Assembly**: Shuffle questions into pages inside the document envelope
//! 4. **Export**: Serialize the document to JSON

use crate::assembler::assemble;
use crate::quiz_config::{QuizConfig, QuizConfigError};
use crate::quiz_document::QuizDocument;
use crate::source_model::{normalize, SourceModelError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the environment variable holding the source document path
pub const DOC_PATH_ENV: &str = "DOC_PATH";

/// Default output path for the generated quiz
pub const DEFAULT_OUTPUT: &str = "quiz.generated.json";

/// Stage 1: Read the source document
///
/// # Parameters
/// * `path` - Location of the markdown source, if one was given
///
/// # Returns
/// * `Ok(String)` - The markdown text
/// * `Err(CompileError)` - No location given, or the file could not be read
pub fn read_source(path: Option<&Path>) -> Result<String, CompileError> {
    let path = path.ok_or(CompileError::MissingSource)?;
    log::info!("Reading quiz source: {}", path.display());
    std::fs::read_to_string(path).map_err(|e| CompileError::IoError(path.to_path_buf(), e))
}

/// Stages 2 and 3: Compile markdown into a quiz document
///
/// Uses a freshly seeded generator, so question order and element names
/// differ on every call.
///
/// # Parameters
/// * `markdown` - Raw markdown source
/// * `config` - Envelope options
///
/// # Returns
/// * `Ok(QuizDocument)` - The assembled quiz
/// * `Err(CompileError)` - A question failed validation
pub fn compile(markdown: &str, config: &QuizConfig) -> Result<QuizDocument, CompileError> {
    compile_with_rng(markdown, config, &mut StdRng::from_entropy())
}

/// Compile markdown into a quiz document with a caller-supplied generator
///
/// # Parameters
/// * `markdown` - Raw markdown source
/// * `config` - Envelope options
/// * `rng` - Source of randomness for question order and element names
///
/// # Returns
/// * `Ok(QuizDocument)` - The assembled quiz
/// * `Err(CompileError)` - A question failed validation
pub fn compile_with_rng<R: Rng + ?Sized>(
    markdown: &str,
    config: &QuizConfig,
    rng: &mut R,
) -> Result<QuizDocument, CompileError> {
    let source = normalize(markdown);
    log::info!(
        "Parsed {} question section(s) for quiz '{}'",
        source.sections.len(),
        source.title
    );

    let questions = source.questions()?;
    if questions.is_empty() {
        log::warn!("Quiz source contains no question sections");
    }

    let document = assemble(&source.title, questions, config, rng);
    log::info!("Assembled {} page(s)", document.pages.len());

    Ok(document)
}

/// Run every stage: read, compile, and write the JSON document
///
/// Nothing is written unless compilation succeeds.
///
/// # Parameters
/// * `source` - Location of the markdown source, if one was given
/// * `output` - Path of the JSON file to write
/// * `config` - Envelope options
/// * `rng` - Source of randomness
///
/// # Returns
/// * `Ok(QuizDocument)` - The document that was written
/// * `Err(CompileError)` - Any stage failed
pub fn compile_file<R: Rng + ?Sized>(
    source: Option<&Path>,
    output: &Path,
    config: &QuizConfig,
    rng: &mut R,
) -> Result<QuizDocument, CompileError> {
    let markdown = read_source(source)?;
    let document = compile_with_rng(&markdown, config, rng)?;
    export::write_json(&document, output)?;
    Ok(document)
}

/// Load configuration, falling back to defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<QuizConfig, CompileError> {
    match path {
        Some(path) => QuizConfig::load(path)
            .map_err(|e| CompileError::ConfigError(path.to_path_buf(), Box::new(e))),
        None => Ok(QuizConfig::default()),
    }
}

/// Stage 4: Export
pub mod export {
    use super::CompileError;
    use crate::quiz_document::QuizDocument;
    use std::path::{Path, PathBuf};

    /// Serialize a quiz document as pretty-printed JSON
    pub fn to_json(document: &QuizDocument) -> Result<String, CompileError> {
        Ok(serde_json::to_string_pretty(document)?)
    }

    /// Write a quiz document to a JSON file
    ///
    /// The document is serialized in full first, written next to the target
    /// and renamed into place, so the target never holds a partial document.
    ///
    /// # Parameters
    /// * `document` - The quiz to write
    /// * `output_path` - Destination file
    ///
    /// # Returns
    /// * `Ok(())` - The file was written
    /// * `Err(CompileError)` - Serialization or IO failed
    pub fn write_json(document: &QuizDocument, output_path: &Path) -> Result<(), CompileError> {
        let mut json = to_json(document)?;
        json.push('\n');

        let temp_path = temp_path_for(output_path);
        log::info!("Writing quiz JSON to: {}", output_path.display());

        if let Err(e) = std::fs::write(&temp_path, json) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(CompileError::WriteError(output_path.to_path_buf(), e));
        }

        std::fs::rename(&temp_path, output_path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            CompileError::WriteError(output_path.to_path_buf(), e)
        })
    }

    /// Sibling path used while writing
    fn temp_path_for(output_path: &Path) -> PathBuf {
        let mut file_name = output_path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        output_path.with_file_name(file_name)
    }
}

/// Compilation errors
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(
        "No quiz source given. Pass a markdown file path or set the {env} environment variable",
        env = DOC_PATH_ENV
    )]
    MissingSource,

    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("IO error writing {path}: {source}", path = .0.display(), source = .1)]
    WriteError(PathBuf, #[source] std::io::Error),

    #[error("Config error loading {path}: {source}", path = .0.display(), source = .1)]
    ConfigError(PathBuf, #[source] Box<QuizConfigError>),

    #[error("Invalid quiz source: {0}")]
    SourceModelError(#[from] SourceModelError),

    #[error("Failed to serialize quiz document: {0}")]
    SerializeError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::ValidationErrorKind;

    #[test]
    fn test_read_source_requires_path() {
        let result = read_source(None);

        assert!(matches!(result, Err(CompileError::MissingSource)));
        assert!(result.unwrap_err().to_string().contains(DOC_PATH_ENV));
    }

    #[test]
    fn test_read_source_missing_file() {
        let path = Path::new("/nonexistent/quiz.md");

        let result = read_source(Some(path));

        assert!(matches!(result, Err(CompileError::IoError(p, _)) if p == path));
    }

    #[test]
    fn test_compile_concrete_scenario() {
        let document = compile("# T\n\n## Q1\n> d1\n- [x] a\n- [ ] b\n", &QuizConfig::default())
            .unwrap();

        assert_eq!(document.title, "T");
        assert_eq!(document.pages.len(), 1);
        let question = document.questions().next().unwrap();
        assert_eq!(question.choices, vec!["a", "b"]);
        assert_eq!(question.correct_answer, vec!["a"]);
    }

    #[test]
    fn test_compile_reports_validation_kind() {
        let result = compile("# T\n\n## Q1\n> d1\n- [ ] a\n- [ ] b\n", &QuizConfig::default());

        match result {
            Err(CompileError::SourceModelError(e)) => {
                assert_eq!(e.validation_kind(), Some(ValidationErrorKind::NoCorrectAnswer));
                assert!(e.to_string().contains("Q1"));
            }
            other => panic!("Expected source model error, got {:?}", other),
        }
    }

    #[test]
    fn test_compile_empty_document() {
        let document = compile("", &QuizConfig::default()).unwrap();

        assert_eq!(document.title, "");
        assert!(document.pages.is_empty());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();

        assert_eq!(config, QuizConfig::default());
    }
}
