//! Interactive answering loop shared by `generate --take` and `show --take`.

use std::io::{BufRead, Write};

use anyhow::Context;
use wikiquiz_core::entities::{Question, Quiz};
use wikiquiz_core::scoring::{Selections, review, score};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::quiz::{QuizResult, render_question, render_quiz, render_result};

/// How one line of user input maps onto a question's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Skip,
    Pick(usize),
    Invalid,
}

/// Accepts a letter (`b`, `B`) or a 1-based number (`2`). Blank skips.
pub fn parse_choice(input: &str, options: usize) -> Choice {
    let input = input.trim();
    if input.is_empty() {
        return Choice::Skip;
    }
    let index = match input.parse::<usize>() {
        Ok(number) => number.checked_sub(1),
        Err(_) => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => {
                    Some(usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
                }
                _ => None,
            }
        }
    };
    match index {
        Some(index) if index < options => Choice::Pick(index),
        _ => Choice::Invalid,
    }
}

/// Ask every question in order, reading one answer line each.
///
/// Input ending early leaves the remaining questions unanswered.
pub fn take_quiz<R: BufRead, W: Write>(
    quiz: &Quiz,
    mut input: R,
    mut prompt: W,
) -> anyhow::Result<Selections> {
    let mut selections = Selections::new();
    'questions: for (index, question) in quiz.questions.iter().enumerate() {
        write!(prompt, "\n{}", render_question(index, question))?;
        loop {
            write!(prompt, "{}", answer_prompt(question))?;
            prompt.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break 'questions;
            }
            match parse_choice(&line, question.options.len()) {
                Choice::Skip => break,
                Choice::Pick(option) => {
                    selections.select_nth(quiz, index, option)?;
                    break;
                }
                Choice::Invalid => writeln!(prompt, "Not an option, try again.")?,
            }
        }
    }
    Ok(selections)
}

fn answer_prompt(question: &Question) -> String {
    let last = question.options.len().saturating_sub(1);
    format!(
        "Your answer (A-{}, Enter to skip): ",
        Question::option_label(last)
    )
}

/// Print the quiz, or run it interactively and print the result.
pub async fn present(quiz: Quiz, take: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !take {
        println!("{}", render_quiz(&quiz, flags.format)?);
        if flags.format == OutputFormat::Table && !flags.quiet {
            eprintln!("\nRun again with --take to answer the questions.");
        }
        return Ok(());
    }

    if quiz.is_empty() {
        anyhow::bail!("quiz has no questions to answer");
    }
    eprintln!("{} ({} questions)", quiz.title, quiz.len());

    // Prompts go to stderr so stdout carries only the result.
    let (quiz, selections) = tokio::task::spawn_blocking(move || {
        let selections = take_quiz(&quiz, std::io::stdin().lock(), std::io::stderr())?;
        anyhow::Ok((quiz, selections))
    })
    .await
    .context("answering loop panicked")??;

    let result = QuizResult::new(score(&quiz, &selections), review(&quiz, &selections));
    println!("{}", render_result(&result, flags.format)?);
    Ok(())
}
