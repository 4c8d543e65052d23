//! mdquiz - Markdown quiz compiler
//!
//! Converts a markdown quiz into the JSON document a survey renderer
//! displays. The stages are exposed individually:
//!
//! - [`source_model::normalize`] groups markdown into question sections
//! - [`source_model::parse_section`] classifies a section into a draft
//! - [`source_model::validate`] checks the draft's required fields
//! - [`assembler::assemble`] shuffles questions into the document envelope
//! - [`pipeline`] chains the stages and writes the result

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod assembler;
pub mod pipeline;
pub mod quiz_config;
pub mod quiz_document;
pub mod source_model;

pub use pipeline::{compile, compile_with_rng, CompileError};
pub use quiz_config::QuizConfig;
pub use quiz_document::QuizDocument;
