//! Detail resolver transitions and stale-result handling.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeApi, Outcome, Reply, detail};
use pretty_assertions::assert_eq;
use wikiquiz_core::errors::{ErrorCategory, NETWORK_ERROR_MESSAGE};
use wikiquiz_core::state::DetailViewState;
use wikiquiz_session::{DetailResolver, OpenOutcome};

fn resolver(api: &Arc<FakeApi>) -> Arc<DetailResolver<FakeApi>> {
    Arc::new(DetailResolver::new(Arc::clone(api)))
}

#[tokio::test(start_paused = true)]
async fn open_moves_closed_loading_open() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::after(
        Duration::from_secs(2),
        Outcome::Ok(detail("Cat", 7)),
    ));
    let resolver = resolver(&api);
    let mut rx = resolver.subscribe();
    assert_eq!(*rx.borrow_and_update(), DetailViewState::Closed);

    let task = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.open(7).await })
    };

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), DetailViewState::Loading { id: 7 });

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    let quiz = state.quiz().expect("open carries the quiz");
    assert_eq!(quiz.id, Some(7));
    assert_eq!(quiz.title, "Cat");
    assert_eq!(quiz.url, "https://en.wikipedia.org/wiki/Cat");

    assert_eq!(task.await.unwrap(), Ok(OpenOutcome::Opened));
}

#[tokio::test]
async fn unreachable_backend_closes_with_network_failure() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::now(Outcome::Unreachable));
    let resolver = resolver(&api);

    let failure = resolver.open(42).await.unwrap_err();

    assert_eq!(failure.category, ErrorCategory::Network);
    assert_eq!(failure.message, NETWORK_ERROR_MESSAGE);
    assert_eq!(resolver.state(), DetailViewState::Closed);
    assert_eq!(api.detail_calls(), 1);
}

#[tokio::test]
async fn missing_quiz_is_a_client_failure() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::now(Outcome::Status(404, Some("Quiz not found"))));
    let resolver = resolver(&api);

    let failure = resolver.open(999).await.unwrap_err();

    assert_eq!(failure.category, ErrorCategory::Client);
    assert_eq!(failure.message, "Quiz not found");
    assert_eq!(resolver.state(), DetailViewState::Closed);
}

#[tokio::test(start_paused = true)]
async fn abandoned_open_closes_the_view() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::after(
        Duration::from_secs(60),
        Outcome::Ok(detail("Cat", 7)),
    ))
    .push_detail(Reply::now(Outcome::Ok(detail("Dog", 8))));
    let resolver = resolver(&api);

    let abandoned = tokio::time::timeout(Duration::from_secs(1), resolver.open(7)).await;
    assert!(abandoned.is_err());
    assert_eq!(resolver.state(), DetailViewState::Closed);

    assert_eq!(resolver.open(8).await, Ok(OpenOutcome::Opened));
    assert_eq!(resolver.state().quiz().map(|quiz| quiz.title.as_str()), Some("Dog"));
}

#[tokio::test(start_paused = true)]
async fn close_during_loading_stays_closed() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::after(
        Duration::from_secs(3),
        Outcome::Ok(detail("Cat", 7)),
    ));
    let resolver = resolver(&api);

    let task = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.open(7).await })
    };
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(resolver.state(), DetailViewState::Loading { id: 7 });

    resolver.close();

    assert_eq!(task.await.unwrap(), Ok(OpenOutcome::Discarded));
    assert_eq!(resolver.state(), DetailViewState::Closed);
}

#[tokio::test(start_paused = true)]
async fn late_failure_after_close_is_not_reported() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::after(
        Duration::from_secs(3),
        Outcome::Status(500, None),
    ));
    let resolver = resolver(&api);

    let task = {
        let resolver = Arc::clone(&resolver);
        tokio::spawn(async move { resolver.open(7).await })
    };
    tokio::time::sleep(Duration::from_secs(1)).await;
    resolver.close();

    assert_eq!(task.await.unwrap(), Ok(OpenOutcome::Discarded));
}

#[tokio::test(start_paused = true)]
async fn newer_open_supersedes_older() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::after(
        Duration::from_secs(5),
        Outcome::Ok(detail("Cat", 1)),
    ))
    .push_detail(Reply::after(
        Duration::from_secs(1),
        Outcome::Ok(detail("Dog", 2)),
    ));
    let resolver = resolver(&api);

    let (first, second) = tokio::join!(resolver.open(1), resolver.open(2));

    assert_eq!(first, Ok(OpenOutcome::Discarded));
    assert_eq!(second, Ok(OpenOutcome::Opened));
    assert_eq!(resolver.state().quiz().unwrap().title, "Dog");
}

#[tokio::test]
async fn close_is_unconditional() {
    let api = Arc::new(FakeApi::new());
    api.push_detail(Reply::now(Outcome::Ok(detail("Cat", 7))));
    let resolver = resolver(&api);

    resolver.open(7).await.unwrap();
    assert!(resolver.state().quiz().is_some());

    resolver.close();
    resolver.close();
    assert_eq!(resolver.state(), DetailViewState::Closed);
}
