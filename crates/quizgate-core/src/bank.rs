//! Question bank.
//!
//! Questions are data, not code: a bank is loaded from JSON and validated
//! once, then shared read-only. The default bank ships embedded from
//! `fixtures/questions.json`.
//!
//! # Format
//!
//! ```json
//! [
//!   { "text": "...", "kind": "multiple-choice", "options": ["a", "b"], "answer": "a" },
//!   { "text": "...", "kind": "free-text", "answer": "x" }
//! ]
//! ```

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::BankError;

const BUILTIN_QUESTIONS: &str = include_str!("../fixtures/questions.json");

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one of the listed options.
    MultipleChoice,
    /// Type the answer.
    FreeText,
}

/// One immutable question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Multiple-choice question.
    pub fn multiple_choice<I, S>(text: impl Into<String>, options: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            kind: QuestionKind::MultipleChoice,
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Free-text question.
    pub fn free_text(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
            answer: answer.into(),
        }
    }

    /// Question text; also the answer key.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answer style.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Options in display order. Empty for free-text.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Reference answer.
    pub fn reference_answer(&self) -> &str {
        &self.answer
    }

    /// Case-insensitive match against the reference answer.
    ///
    /// An empty submission never matches.
    pub fn accepts(&self, submitted: &str) -> bool {
        !submitted.is_empty() && submitted.to_lowercase() == self.answer.to_lowercase()
    }
}

/// Validated, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    /// The embedded default bank.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Parse a bank from JSON text.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Load a bank from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let bank = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "question bank loaded");
        Ok(bank)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index` (zero-based).
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Questions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Whether `text` names a question in this bank.
    pub fn contains(&self, text: &str) -> bool {
        self.questions.iter().any(|q| q.text == text)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(questions: &[Question]) -> Result<(), BankError> {
    if questions.is_empty() {
        return Err(BankError::Empty);
    }

    let mut seen = HashSet::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        if question.text.is_empty() {
            return Err(BankError::EmptyText { index });
        }
        if !seen.insert(question.text.as_str()) {
            return Err(BankError::DuplicateText { text: question.text.clone() });
        }

        match question.kind {
            QuestionKind::MultipleChoice if question.options.is_empty() => {
                return Err(BankError::MissingOptions { text: question.text.clone() });
            },
            QuestionKind::MultipleChoice if !question.options.contains(&question.answer) => {
                return Err(BankError::AnswerNotAnOption {
                    text: question.text.clone(),
                    answer: question.answer.clone(),
                });
            },
            QuestionKind::FreeText if !question.options.is_empty() => {
                return Err(BankError::UnexpectedOptions { text: question.text.clone() });
            },
            QuestionKind::MultipleChoice | QuestionKind::FreeText => {},
        }
    }

    Ok(())
}
