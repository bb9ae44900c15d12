//! Shared fixtures for session engine tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wikiquiz_client::{ApiError, QuizApi};
use wikiquiz_core::entities::{Question, Quiz, QuizId, QuizSummary};
use wikiquiz_core::responses::{
    GenerateQuizRequest, GenerateQuizResponse, HistoryResponse, QuizDetailResponse, QuizMeta,
};

pub const CAT_URL: &str = "https://en.wikipedia.org/wiki/Cat";

/// How a scripted call resolves.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Ok(T),
    Status(u16, Option<&'static str>),
    /// No response at all: refused connection, DNS failure, timeout.
    Unreachable,
    /// 2xx with a body that does not decode.
    Malformed,
}

/// One scripted reply, delivered after `delay`.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub delay: Duration,
    pub outcome: Outcome<T>,
}

impl<T> Reply<T> {
    pub const fn now(outcome: Outcome<T>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome,
        }
    }

    pub const fn after(delay: Duration, outcome: Outcome<T>) -> Self {
        Self { delay, outcome }
    }
}

/// In-process `QuizApi` that plays back scripted replies in call order.
///
/// An exhausted history script answers with an empty list; exhausted
/// generate and detail scripts answer 500.
#[derive(Default)]
pub struct FakeApi {
    generate: Mutex<VecDeque<Reply<GenerateQuizResponse>>>,
    history: Mutex<VecDeque<Reply<HistoryResponse>>>,
    detail: Mutex<VecDeque<Reply<QuizDetailResponse>>>,
    pub generate_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub requests: Mutex<Vec<GenerateQuizRequest>>,
    pub history_limits: Mutex<Vec<u32>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_generate(&self, reply: Reply<GenerateQuizResponse>) -> &Self {
        self.generate.lock().unwrap().push_back(reply);
        self
    }

    pub fn push_history(&self, reply: Reply<HistoryResponse>) -> &Self {
        self.history.lock().unwrap().push_back(reply);
        self
    }

    pub fn push_detail(&self, reply: Reply<QuizDetailResponse>) -> &Self {
        self.detail.lock().unwrap().push_back(reply);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

async fn play<T>(reply: Reply<T>) -> Result<T, ApiError> {
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    match reply.outcome {
        Outcome::Ok(value) => Ok(value),
        Outcome::Status(status, detail) => Err(ApiError::Status {
            status,
            detail: detail.map(str::to_string),
        }),
        Outcome::Unreachable => Err(transport_error().await),
        Outcome::Malformed => Err(ApiError::Decode("expected value at line 1 column 1".into())),
    }
}

/// A genuine `reqwest` error produced without any network access.
pub async fn transport_error() -> ApiError {
    let error = reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .expect_err("an invalid url never sends");
    ApiError::Transport(error)
}

impl QuizApi for FakeApi {
    async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<GenerateQuizResponse, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .generate
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::now(Outcome::Status(500, None)));
        play(reply).await
    }

    async fn history(&self, limit: u32) -> Result<HistoryResponse, ApiError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history_limits.lock().unwrap().push(limit);
        let reply = self
            .history
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::now(Outcome::Ok(HistoryResponse::default())));
        play(reply).await
    }

    async fn quiz(&self, _id: QuizId) -> Result<QuizDetailResponse, ApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .detail
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::now(Outcome::Status(500, None)));
        play(reply).await
    }
}

// ── Builders ───────────────────────────────────────────────────────

pub fn quiz(title: &str, questions: usize) -> Quiz {
    Quiz {
        title: title.to_string(),
        summary: format!("{title} summary"),
        questions: (0..questions)
            .map(|n| Question {
                question: format!("{title} question {n}?"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                answer: "A".into(),
            })
            .collect(),
        ..Quiz::default()
    }
}

pub fn generated(title: &str, id: QuizId) -> GenerateQuizResponse {
    GenerateQuizResponse {
        quiz: quiz(title, 10),
        id: Some(id),
        cached: false,
    }
}

pub fn detail(title: &str, id: QuizId) -> QuizDetailResponse {
    QuizDetailResponse {
        quiz: quiz(title, 10),
        meta: Some(QuizMeta {
            id,
            url: Some(format!("https://en.wikipedia.org/wiki/{title}")),
            title: Some(title.to_string()),
            date_generated: None,
        }),
    }
}

pub fn summary(id: QuizId, title: &str) -> QuizSummary {
    QuizSummary {
        id,
        title: Some(title.to_string()),
        url: format!("https://en.wikipedia.org/wiki/{title}"),
        date_generated: None,
    }
}

pub fn history(rows: &[(QuizId, &str)]) -> HistoryResponse {
    HistoryResponse {
        quizzes: rows.iter().map(|(id, title)| summary(*id, title)).collect(),
    }
}
