//! Markdown quiz parser.
//!
//! # Format
//! ```markdown
//! #### What is 2+2?
//! ![diagram](img/diagram.png)
//! - [ ] 3
//! - [x] 4
//! ```
//!
//! A line starting with three backticks opens or closes a fenced block. Fenced
//! lines are captured verbatim into the open question's `question_markdown`,
//! delimiters included. Anything the grammar does not recognize is dropped.

use crate::types::{Document, Question};
use regex::Regex;
use std::sync::LazyLock;

const HEADER_MARKER: &str = "####";
const FENCE_MARKER: &str = "```";

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[.*\]\((.*)\)").expect("image pattern is valid"));

static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\[([xX ])\]\s*(.*)").expect("option pattern is valid"));

/// Parse markdown content into questions, in document order.
///
/// Never fails: malformed or stray lines are ignored.
pub fn parse(content: &str) -> Vec<Question> {
    let mut scanner = Scanner::new();
    for line in content.split_inclusive('\n') {
        scanner.process_line(line);
    }
    scanner.finish()
}

/// Parse content and stamp every question with `updated_at`.
pub fn parse_document(name: &str, content: &str, updated_at: &str) -> Document {
    let mut document = Document::new(name, parse(content));
    document.stamp(updated_at);
    document
}

/// Whether the scanner is inside a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Plain,
    InFence,
}

impl ScanMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Plain => Self::InFence,
            Self::InFence => Self::Plain,
        }
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fence,
    Blank,
    Header(&'a str),
    Image(&'a str),
    Option { text: &'a str, is_correct: bool },
    Other,
}

/// Classify a trimmed line. Checks run in priority order: fence, blank,
/// header, image, option.
pub fn classify(trimmed: &str) -> LineKind<'_> {
    if trimmed.starts_with(FENCE_MARKER) {
        return LineKind::Fence;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix(HEADER_MARKER) {
        return LineKind::Header(rest.trim());
    }
    if let Some(url) = IMAGE_RE.captures(trimmed).and_then(|caps| caps.get(1)) {
        return LineKind::Image(url.as_str());
    }
    if let Some(caps) = OPTION_RE.captures(trimmed) {
        let marker = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str().trim());
        return LineKind::Option {
            text,
            is_correct: marker.eq_ignore_ascii_case("x"),
        };
    }
    LineKind::Other
}

/// Single-pass line scanner holding the state of one file's conversion.
#[derive(Debug, Default)]
pub struct Scanner {
    mode: ScanMode,
    current: Option<Question>,
    sealed: Vec<Question>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Feed one raw line, terminator included.
    pub fn process_line(&mut self, raw: &str) {
        let kind = classify(raw.trim());

        match (self.mode, kind) {
            (_, LineKind::Fence) => {
                self.mode = self.mode.toggle();
                self.capture(raw);
            }
            (ScanMode::InFence, _) => self.capture(raw),
            (ScanMode::Plain, LineKind::Header(text)) => {
                self.seal();
                self.current = Some(Question::new(text));
            }
            (ScanMode::Plain, LineKind::Image(url)) => {
                if let Some(question) = self.current.as_mut() {
                    question.picture_url = url.to_string();
                }
            }
            (ScanMode::Plain, LineKind::Option { text, is_correct }) => {
                if let Some(question) = self.current.as_mut() {
                    question.push_option(text, is_correct);
                }
            }
            (ScanMode::Plain, LineKind::Blank | LineKind::Other) => {}
        }
    }

    /// Seal the open question and return everything parsed so far. An
    /// unterminated fence keeps whatever it captured.
    pub fn finish(mut self) -> Vec<Question> {
        self.seal();
        self.sealed
    }

    fn capture(&mut self, raw: &str) {
        if let Some(question) = self.current.as_mut() {
            question.question_markdown.push_str(raw);
        }
    }

    fn seal(&mut self) {
        if let Some(question) = self.current.take() {
            self.sealed.push(question);
        }
    }
}
