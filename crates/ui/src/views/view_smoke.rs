use dioxus::prelude::keyboard_types::Key;
use quiz_core::model::{CategoryFilter, CategoryKey, QuizMode};
use services::{IgnoreReason, QuizPhase, SessionOptions, Transition};

use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::QuizIntent;

fn quiz_harness() -> ViewHarness {
    setup_view_harness(SessionOptions {
        mode: QuizMode::Quiz,
        seed: Some(3),
        ..SessionOptions::default()
    })
}

fn correct_index(harness: &ViewHarness) -> usize {
    harness.with_session(|session| {
        session
            .current_question()
            .map(|q| q.correct_index())
            .expect("question on screen")
    })
}

#[test]
fn browse_view_smoke_renders_cards_and_menu() {
    let harness = setup_view_harness(SessionOptions::default());
    let html = harness.render();

    assert!(html.contains("All questions (3)"), "missing menu entry in {html}");
    assert!(html.contains("Databases (1)"), "missing category in {html}");
    assert!(html.contains("Networking (2)"), "missing category in {html}");
    assert!(html.contains("<strong>packets</strong>"), "prompt not rendered as markdown in {html}");
    assert!(html.contains("(A) Alpha"), "missing option label in {html}");
    assert!(html.contains("Show answer"), "missing reveal toggle in {html}");
    assert!(!html.contains("Answer: "), "answer should start hidden in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = quiz_harness();
    let html = harness.render();
    assert!(html.contains("Question 1 / 3"), "missing progress in {html}");
    assert!(html.contains("quiz-option-3"), "missing option buttons in {html}");
}

#[test]
fn answering_wrong_shows_feedback_and_correct_option() {
    let mut harness = quiz_harness();
    let correct = correct_index(&harness);
    harness.dispatch(QuizIntent::Answer((correct + 1) % 4));

    let html = harness.render();
    assert!(html.contains("Wrong. The correct answer is"), "missing feedback in {html}");
    assert!(html.contains("option--revealed"), "correct option not highlighted in {html}");
    assert!(html.contains("option--wrong"), "chosen option not marked in {html}");
}

#[test]
fn finishing_a_pass_renders_results_and_retry_wrong() {
    let mut harness = quiz_harness();
    let first = correct_index(&harness);
    harness.dispatch(QuizIntent::Answer((first + 1) % 4));
    harness.dispatch(QuizIntent::Next);
    for _ in 0..2 {
        let correct = correct_index(&harness);
        harness.dispatch(QuizIntent::Answer(correct));
        harness.dispatch(QuizIntent::Next);
    }

    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing score in {html}");
    assert!(html.contains("Missed questions"), "missing missed list in {html}");
    assert!(html.contains("Retry wrong (1)"), "missing retry wrong in {html}");
    assert!(html.contains("Time: 0:00"), "missing elapsed time in {html}");

    harness.dispatch(QuizIntent::RetryWrong);
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "retry should run one question in {html}");
    assert_eq!(
        harness.with_session(|session| session.phase()),
        QuizPhase::AwaitingAnswer { position: 0 }
    );
}

#[test]
fn next_on_results_screen_is_ignored_and_keeps_button_activation() {
    let mut harness = quiz_harness();
    for _ in 0..3 {
        let correct = correct_index(&harness);
        harness.dispatch(QuizIntent::Answer(correct));
        harness.dispatch(QuizIntent::Next);
    }
    let before = harness.render();
    assert!(before.contains("Retry all"), "missing results in {before}");

    assert_eq!(
        harness.try_dispatch(QuizIntent::Next),
        Transition::Ignored(IgnoreReason::PassFinished)
    );
    assert!(!harness.press(Key::Enter), "Enter must reach the focused button");
    assert!(!harness.press(Key::ArrowLeft));
    assert_eq!(harness.render(), before);
}

#[test]
fn enter_advances_only_after_an_answer() {
    let mut harness = quiz_harness();
    assert!(!harness.press(Key::Enter), "unanswered question keeps Enter");

    assert!(harness.press(Key::Character("1".into())));
    assert!(harness.press(Key::Enter));
    assert_eq!(
        harness.with_session(|session| session.phase()),
        QuizPhase::AwaitingAnswer { position: 1 }
    );
}

#[test]
fn shortcuts_are_inactive_in_browse_mode() {
    let mut harness = setup_view_harness(SessionOptions::default());
    let before = harness.render();
    assert!(!harness.press(Key::Character("1".into())));
    assert!(!harness.press(Key::Enter));
    assert_eq!(harness.render(), before);
}

#[test]
fn perfect_pass_hides_retry_wrong() {
    let mut harness = quiz_harness();
    for _ in 0..3 {
        let correct = correct_index(&harness);
        harness.dispatch(QuizIntent::Answer(correct));
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("3 / 3"), "missing score in {html}");
    assert!(html.contains("Perfect!"), "missing tier message in {html}");
    assert!(!html.contains("Retry wrong"), "retry wrong should be hidden in {html}");
}

#[test]
fn empty_category_renders_empty_state() {
    let mut harness = quiz_harness();
    harness.dispatch(QuizIntent::SelectCategory(CategoryFilter::Only(
        CategoryKey::new("security").unwrap(),
    )));
    harness.dispatch(QuizIntent::Answer(0));

    let html = harness.render();
    assert!(html.contains("No questions in this category."), "missing empty state in {html}");
    assert!(harness.with_session(|session| session.wrong_answers().is_empty()));
}

#[test]
fn home_returns_to_full_list() {
    let mut harness = quiz_harness();
    harness.dispatch(QuizIntent::SelectCategory(CategoryFilter::Only(
        CategoryKey::new("database").unwrap(),
    )));
    harness.dispatch(QuizIntent::Home);

    let html = harness.render();
    assert!(html.contains("Show answer"), "expected browse cards in {html}");
    assert_eq!(
        harness.with_session(|session| session.active_questions().len()),
        3
    );
}
