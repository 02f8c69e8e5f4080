//! Plain-text rendering of views and toasts.

use std::io::{self, Write};

use quizgate_core::{NoticeKind, QuestionKind, QuizEngine, Route, ScoreResult, Toast};

/// Draw `route`.
pub fn view(out: &mut impl Write, route: Route, quiz: &QuizEngine) -> io::Result<()> {
    match route {
        Route::Login => login(out),
        Route::Quiz => quiz_view(out, quiz),
    }
}

fn login(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Login ==")?;
    writeln!(out, "login <username> <password>")
}

fn quiz_view(out: &mut impl Write, quiz: &QuizEngine) -> io::Result<()> {
    writeln!(out, "== The Quiz is here ==")?;

    for (number, question) in quiz.bank().iter().enumerate().map(|(i, q)| (i + 1, q)) {
        let current = quiz.answers().get(question.text());
        writeln!(out, "{number}. {}", question.text())?;

        match question.kind() {
            QuestionKind::MultipleChoice => {
                for (index, option) in question.options().iter().enumerate() {
                    let mark = if current == Some(option.as_str()) { '*' } else { ' ' };
                    writeln!(out, "   ({mark}) {}. {option}", index + 1)?;
                }
            },
            QuestionKind::FreeText => match current {
                Some(value) => writeln!(out, "   > {value}")?,
                None => writeln!(out, "   > (Answer here)")?,
            },
        }
    }

    writeln!(out, "[submit] Submit Exam")?;
    if let Some(result) = quiz.last_result() {
        score(out, result)?;
    }
    Ok(())
}

/// Draw the inline score line.
pub fn score(out: &mut impl Write, result: ScoreResult) -> io::Result<()> {
    writeln!(out, "Your Score: {result}")
}

/// Draw a toast.
pub fn toast<I>(out: &mut impl Write, toast: &Toast<I>) -> io::Result<()> {
    let tag = match toast.kind() {
        NoticeKind::Error => "error",
        NoticeKind::Success => "success",
    };
    writeln!(out, "[{tag}] {}", toast.notice)
}
