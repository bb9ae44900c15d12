//! Answer selection and scoring.
//!
//! Scoring is a pure function of a [`Quiz`] and a [`Selections`] map. Nothing
//! here is persisted; selections live as long as the view that owns them and
//! can be revised and rescored any number of times.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Quiz;
use crate::errors::CoreError;

/// Sparse map from question index to the selected option text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    answers: BTreeMap<usize, String>,
}

impl Selections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `option` for question `index`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::QuestionOutOfRange`] if `index` is past the end of
    /// the quiz, or [`CoreError::UnknownOption`] if the question does not
    /// offer `option`.
    pub fn select(&mut self, quiz: &Quiz, index: usize, option: &str) -> Result<(), CoreError> {
        let question = quiz
            .questions
            .get(index)
            .ok_or(CoreError::QuestionOutOfRange {
                index,
                total: quiz.questions.len(),
            })?;
        if !question.offers(option) {
            return Err(CoreError::UnknownOption {
                index,
                option: option.to_string(),
            });
        }
        self.answers.insert(index, option.to_string());
        Ok(())
    }

    /// Select the option at `option_index` for question `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Selections::select`].
    pub fn select_nth(
        &mut self,
        quiz: &Quiz,
        index: usize,
        option_index: usize,
    ) -> Result<(), CoreError> {
        let option = quiz
            .questions
            .get(index)
            .ok_or(CoreError::QuestionOutOfRange {
                index,
                total: quiz.questions.len(),
            })?
            .options
            .get(option_index)
            .cloned()
            .ok_or_else(|| CoreError::UnknownOption {
                index,
                option: format!("#{option_index}"),
            })?;
        self.select(quiz, index, &option)
    }

    /// Remove the selection for question `index`, if any.
    pub fn clear(&mut self, index: usize) -> Option<String> {
        self.answers.remove(&index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Outcome of scoring a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// Percentage of correct answers, rounded half up. `0` for an empty quiz.
    #[must_use]
    pub const fn percentage(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (200 * self.correct + self.total) / (2 * self.total)
    }
}

/// Score `selections` against `quiz`. Unanswered questions count as incorrect.
#[must_use]
pub fn score(quiz: &Quiz, selections: &Selections) -> Score {
    let correct = quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(index, question)| selections.get(*index) == Some(question.answer.as_str()))
        .count();
    Score {
        correct,
        total: quiz.questions.len(),
    }
}

/// Per-question breakdown shown when answers are revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub selected: Option<String>,
    pub is_correct: bool,
}

/// Build the answer review for every question in order.
#[must_use]
pub fn review(quiz: &Quiz, selections: &Selections) -> Vec<ReviewItem> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = selections.get(index).map(str::to_string);
            let is_correct = selected.as_deref() == Some(question.answer.as_str());
            ReviewItem {
                index,
                question: question.question.clone(),
                answer: question.answer.clone(),
                selected,
                is_correct,
            }
        })
        .collect()
}
