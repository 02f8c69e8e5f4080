//! Quiz engine.
//!
//! Answers are stored verbatim, keyed by question text, and only checked at
//! submission. Scoring is a single pass over the bank; keys that do not name
//! a question are kept but never counted.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::bank::QuestionBank;

/// Submitted answers keyed by question text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashMap<String, String>,
}

impl AnswerSet {
    /// Empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for `question`.
    pub fn record(&mut self, question: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(question.into(), value.into());
    }

    /// Answer recorded for `question`.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    /// Number of recorded keys, including ones that match no question.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// No answers recorded.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Outcome of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    /// Questions answered correctly.
    pub score: usize,
    /// Questions in the bank.
    pub total: usize,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.score, self.total)
    }
}

/// Question bank plus the answers recorded against it.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
    answers: AnswerSet,
    last_result: Option<ScoreResult>,
}

impl QuizEngine {
    /// Engine with no answers over `bank`.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank, answers: AnswerSet::new(), last_result: None }
    }

    /// The question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Result of the most recent submission, if any.
    pub fn last_result(&self) -> Option<ScoreResult> {
        self.last_result
    }

    /// Upsert an answer. The value is not checked against the question's
    /// kind or options.
    pub fn record_answer(&mut self, question: &str, value: &str) {
        self.answers.record(question, value);
    }

    /// Score the current answers and remember the result for display.
    ///
    /// Each call recomputes from scratch and replaces the previous result.
    pub fn submit(&mut self) -> ScoreResult {
        let score = self
            .bank
            .iter()
            .filter(|question| {
                self.answers.get(question.text()).is_some_and(|value| question.accepts(value))
            })
            .count();

        let result = ScoreResult { score, total: self.bank.len() };
        self.last_result = Some(result);
        tracing::info!(score, total = result.total, "quiz submitted");
        result
    }

    /// Drop answers and the displayed result.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.last_result = None;
    }
}
