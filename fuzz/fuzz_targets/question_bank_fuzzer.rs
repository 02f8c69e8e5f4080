//! Fuzz target for [`QuestionBank`] loading
//!
//! # Invariants
//!
//! - Arbitrary bytes NEVER panic the loader
//! - An accepted bank is non-empty with unique question texts
//! - Every accepted multiple-choice question lists its own answer
//! - Every accepted question accepts its reference answer

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use quizgate_core::{QuestionBank, QuestionKind};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(bank) = QuestionBank::from_json(json) else {
        return;
    };

    assert!(!bank.is_empty());

    let mut seen = HashSet::new();
    for question in &bank {
        assert!(seen.insert(question.text()), "duplicate text accepted");

        if question.kind() == QuestionKind::MultipleChoice {
            assert!(
                question.options().iter().any(|option| option == question.reference_answer()),
                "answer not among options"
            );
        }

        if !question.reference_answer().is_empty() {
            assert!(question.accepts(question.reference_answer()));
        }
    }
});
