//! Core library for converting markdown quiz files into JSON documents.
//!
//! Provides:
//! - Line scanner for the `####` / `- [x]` quiz format with fenced-block capture
//! - File loading with last-modified timestamps
//! - Stable pretty JSON rendering
//! - Shared types (Document, Question, QuizOption)

pub mod error;
pub mod parser;
pub mod render;
pub mod source;
pub mod types;

pub use error::{ReadError, Result};
pub use parser::{classify, parse, parse_document, LineKind, ScanMode, Scanner};
pub use render::to_json;
pub use source::{format_timestamp, load_document};
pub use types::{Document, Question, QuizOption, NO_CORRECT_ANSWER};
