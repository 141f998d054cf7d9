//! Core types for converted quiz documents.

use serde::{Deserialize, Serialize};

/// Sentinel for "no option marked correct yet".
pub const NO_CORRECT_ANSWER: i32 = -1;

/// One multiple-choice answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub option_text: String,
    pub is_correct: bool,
}

/// A single quiz question parsed from a `####` header and the lines under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub picture_url: String,
    pub correct_answer: i32,
    pub options: Vec<QuizOption>,
    /// Verbatim fenced block text, delimiters included. Empty when the
    /// question has no fenced block.
    pub question_markdown: String,
    pub updated_at: String,
}

impl Question {
    /// Create an empty question with the given header text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            question: text.into(),
            picture_url: String::new(),
            correct_answer: NO_CORRECT_ANSWER,
            options: Vec::new(),
            question_markdown: String::new(),
            updated_at: String::new(),
        }
    }

    /// Append an option. A correct option becomes the answer, replacing any
    /// earlier one.
    pub fn push_option(&mut self, text: impl Into<String>, is_correct: bool) {
        self.options.push(QuizOption {
            option_text: text.into(),
            is_correct,
        });
        if is_correct {
            self.correct_answer = (self.options.len() - 1) as i32;
        }
    }

    /// The option currently recorded as correct, if any.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        usize::try_from(self.correct_answer)
            .ok()
            .and_then(|idx| self.options.get(idx))
    }

    pub fn has_markdown(&self) -> bool {
        !self.question_markdown.is_empty()
    }
}

/// One converted markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name_of_markdown: String,
    pub questions: Vec<Question>,
}

impl Document {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name_of_markdown: name.into(),
            questions,
        }
    }

    /// Write the same `updated_at` value into every question.
    pub fn stamp(&mut self, updated_at: &str) {
        for question in &mut self.questions {
            question.updated_at = updated_at.to_string();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
