//! Human-oriented views of quizzes, history rows, and results.
//!
//! JSON and raw formats always go through [`super::render`]; only the table
//! format gets the hand-laid-out views below.

use serde::Serialize;
use wikiquiz_core::entities::{Question, Quiz, QuizSummary};
use wikiquiz_core::scoring::{ReviewItem, Score};

use super::{render, table, table_options};
use crate::cli::OutputFormat;

/// Quiz body with questions and lettered options. Answers stay hidden.
pub fn render_quiz(quiz: &Quiz, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(quiz, format);
    }

    let mut out = String::new();
    out.push_str(&quiz.title);
    out.push('\n');
    if !quiz.url.is_empty() {
        out.push_str(&quiz.url);
        out.push('\n');
    }
    if !quiz.summary.is_empty() {
        out.push('\n');
        out.push_str(&quiz.summary);
        out.push('\n');
    }
    if let Some(study) = quiz.study_summary() {
        out.push_str("\nStudy summary\n");
        out.push_str(study);
        out.push('\n');
    }
    for (index, question) in quiz.questions.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_question(index, question));
    }
    Ok(out.trim_end().to_string())
}

/// One numbered question followed by its lettered options.
pub fn render_question(index: usize, question: &Question) -> String {
    let mut out = format!("{}. {}\n", index + 1, question.question);
    for (option_index, option) in question.options.iter().enumerate() {
        out.push_str(&format!(
            "   {}) {}\n",
            Question::option_label(option_index),
            option
        ));
    }
    out
}

pub fn render_history(quizzes: &[QuizSummary], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&quizzes, format);
    }
    if quizzes.is_empty() {
        return Ok(String::from("No quizzes generated yet."));
    }
    let rows = quizzes
        .iter()
        .map(|quiz| {
            vec![
                quiz.id.to_string(),
                quiz.display_title().to_string(),
                quiz.url.clone(),
                quiz.display_date(),
            ]
        })
        .collect::<Vec<_>>();
    Ok(table::render_table(
        &["id", "title", "url", "generated"],
        &rows,
        table_options(),
    ))
}

/// Score plus per-question review, as shown after answers are submitted.
#[derive(Debug, Serialize)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    pub percentage: usize,
    pub review: Vec<ReviewItem>,
}

impl QuizResult {
    pub fn new(score: Score, review: Vec<ReviewItem>) -> Self {
        Self {
            correct: score.correct,
            total: score.total,
            percentage: score.percentage(),
            review,
        }
    }
}

pub fn render_result(result: &QuizResult, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(result, format);
    }
    let rows = result
        .review
        .iter()
        .map(|item| {
            let verdict = match (&item.selected, item.is_correct) {
                (None, _) => "skipped",
                (Some(_), true) => "correct",
                (Some(_), false) => "incorrect",
            };
            vec![
                (item.index + 1).to_string(),
                verdict.to_string(),
                item.selected.clone().unwrap_or_else(|| String::from("-")),
                item.answer.clone(),
                item.question.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let review = table::render_table(
        &["#", "result", "your answer", "answer", "question"],
        &rows,
        table_options(),
    );
    Ok(format!(
        "Score: {}/{} ({}%)\n\n{review}",
        result.correct, result.total, result.percentage
    ))
}
