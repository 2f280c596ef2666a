//! Tests for the review form and submission flow.

use std::sync::Arc;
use std::time::Duration;

use rstest::{fixture, rstest};
use tokio::time::Instant;

use super::review_handlers::{SUBMISSION_IN_FLIGHT, SUBMISSION_SUCCEEDED};
use super::*;
use crate::catalogue::UnconfiguredCatalogueGateway;
use crate::catalogue::models::test_support::movie;
use crate::review::{
    MockReviewSubmitter, ReviewSubmissionError, ReviewSubmitter, SimulatedReviewSubmitter,
};
use crate::telemetry::TelemetryEvent;
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::state::MAX_REVIEW_LENGTH;
use crate::tui::test_support::CommandDriver;

fn app_with_submitter(
    submitter: Arc<dyn ReviewSubmitter>,
    telemetry: Arc<RecordingTelemetrySink>,
    width: u16,
) -> MovieApp {
    let services = AppServices::new(Arc::new(UnconfiguredCatalogueGateway), submitter, telemetry);
    let mut app = MovieApp::with_dimensions(services, AppSettings::default(), width, 30);
    app.dispatch(&AppMsg::MoviesLoaded {
        request: 0,
        movies: vec![
            movie("1", "Alien", &[8.0], "c1"),
            movie("2", "Brazil", &[9.0], "c2"),
        ],
        latency_ms: 0,
    });
    app
}

#[fixture]
fn app() -> MovieApp {
    app_with_submitter(
        Arc::new(SimulatedReviewSubmitter::default()),
        Arc::new(RecordingTelemetrySink::default()),
        100,
    )
}

/// Telemetry from the review flow, ignoring the fetch that seeded the app.
fn review_events(telemetry: &RecordingTelemetrySink) -> Vec<TelemetryEvent> {
    telemetry
        .events()
        .into_iter()
        .filter(|event| matches!(event, TelemetryEvent::ReviewSubmitted { .. }))
        .collect()
}

fn type_text(app: &mut MovieApp, text: &str) {
    for character in text.chars() {
        app.dispatch(&AppMsg::ReviewInsertChar(character));
    }
}

fn select_and_write(app: &mut MovieApp, text: &str) {
    app.dispatch(&AppMsg::SelectCursorRow);
    app.dispatch(&AppMsg::OpenReviewForm);
    type_text(app, text);
}

#[rstest]
#[case("ok")]
#[case("   ok   ")]
#[case("")]
fn short_review_is_rejected_without_submitting(mut app: MovieApp, #[case] text: &str) {
    select_and_write(&mut app, text);

    let commands = app.dispatch(&AppMsg::ReviewSubmit);

    assert_eq!(commands.len(), 1, "only the notification timer is armed");
    assert_eq!(
        app.notification_message(),
        Some("You must write at least 3 characters.")
    );
    assert_ne!(app.review_phase(), ReviewPhase::Submitting);
    assert_eq!(app.draft().text(), text);
}

#[rstest]
fn submit_without_selection_is_rejected(mut app: MovieApp) {
    app.dispatch(&AppMsg::OpenReviewForm);
    type_text(&mut app, "Great film");

    let commands = app.dispatch(&AppMsg::ReviewSubmit);

    assert_eq!(commands.len(), 1);
    assert_eq!(
        app.notification_message(),
        Some("Select a movie before submitting a review.")
    );
    assert_eq!(app.review_phase(), ReviewPhase::NoSelection);
}

#[rstest]
fn typing_stops_at_character_limit(mut app: MovieApp) {
    app.dispatch(&AppMsg::SelectCursorRow);
    type_text(&mut app, &"a".repeat(MAX_REVIEW_LENGTH + 5));

    assert_eq!(app.draft().char_count(), MAX_REVIEW_LENGTH);
    assert!(app.draft().is_at_limit());
}

#[rstest]
fn control_characters_are_not_inserted(mut app: MovieApp) {
    app.dispatch(&AppMsg::SelectCursorRow);
    type_text(&mut app, "a\tb\u{7}c");

    assert_eq!(app.draft().text(), "abc");
}

#[rstest]
fn backspace_removes_last_character(mut app: MovieApp) {
    select_and_write(&mut app, "Good");

    app.dispatch(&AppMsg::ReviewBackspace);

    assert_eq!(app.draft().text(), "Goo");
}

#[rstest]
fn cancel_discards_draft_and_closes_form(mut app: MovieApp) {
    select_and_write(&mut app, "Half a thought");

    app.dispatch(&AppMsg::ReviewCancel);

    assert!(app.draft().is_empty());
    assert!(!app.is_form_focused());
    assert!(app.selected_movie().is_some());
}

#[tokio::test(start_paused = true)]
async fn simulated_submission_confirms_after_one_second() {
    let telemetry = Arc::new(RecordingTelemetrySink::default());
    let app = app_with_submitter(
        Arc::new(SimulatedReviewSubmitter::default()),
        Arc::clone(&telemetry),
        60,
    );
    let mut driver = CommandDriver::new(app);
    select_and_write(driver.app_mut(), "Great film");
    assert!(driver.app().is_modal_open());
    let start = Instant::now();

    driver.send(&AppMsg::ReviewSubmit);
    assert_eq!(driver.app().review_phase(), ReviewPhase::Submitting);

    let submitted = driver
        .run_until(1, |msg| matches!(msg, AppMsg::ReviewSubmitted { .. }))
        .await;

    assert!(submitted.is_some());
    assert_eq!(start.elapsed(), Duration::from_millis(1000));
    let app = driver.app();
    assert_eq!(app.review_phase(), ReviewPhase::Confirmed);
    assert!(app.draft().is_empty());
    assert!(!app.is_modal_open());
    assert_eq!(app.notification_message(), Some(SUBMISSION_SUCCEEDED));
    assert_eq!(
        review_events(&telemetry),
        [TelemetryEvent::ReviewSubmitted {
            movie_id: "1".to_owned(),
        }]
    );
}

#[rstest]
fn second_submit_while_in_flight_is_rejected(mut app: MovieApp) {
    select_and_write(&mut app, "Great film");
    assert_eq!(app.dispatch(&AppMsg::ReviewSubmit).len(), 1);

    let commands = app.dispatch(&AppMsg::ReviewSubmit);

    assert_eq!(commands.len(), 1, "only the notification timer is armed");
    assert_eq!(app.notification_message(), Some(SUBMISSION_IN_FLIGHT));
    assert_eq!(app.review_phase(), ReviewPhase::Submitting);
}

#[rstest]
fn draft_is_frozen_while_its_submission_is_in_flight(mut app: MovieApp) {
    select_and_write(&mut app, "Great film");
    assert_eq!(app.dispatch(&AppMsg::ReviewSubmit).len(), 1);

    type_text(&mut app, " and more");
    app.dispatch(&AppMsg::ReviewBackspace);

    assert_eq!(app.draft().text(), "Great film");
    assert_eq!(app.review_phase(), ReviewPhase::Submitting);
}

#[tokio::test(start_paused = true)]
async fn receipt_never_discards_text_typed_after_submit() {
    let app = app_with_submitter(
        Arc::new(SimulatedReviewSubmitter::default()),
        Arc::new(RecordingTelemetrySink::default()),
        100,
    );
    let mut driver = CommandDriver::new(app);
    select_and_write(driver.app_mut(), "Great film");
    driver.send(&AppMsg::ReviewSubmit);
    type_text(driver.app_mut(), " and more");
    assert_eq!(driver.app().draft().text(), "Great film");

    driver
        .run_until(1, |msg| matches!(msg, AppMsg::ReviewSubmitted { .. }))
        .await;
    driver.abort();

    let app = driver.app();
    assert_eq!(app.review_phase(), ReviewPhase::Confirmed);
    assert!(app.draft().is_empty());
    assert_eq!(app.notification_message(), Some(SUBMISSION_SUCCEEDED));
}

#[tokio::test]
async fn failed_submission_keeps_draft() {
    let mut submitter = MockReviewSubmitter::new();
    submitter
        .expect_submit_review()
        .withf(|movie_id, text| movie_id == "1" && text == "Great film")
        .times(1)
        .returning(|_, _| {
            Err(ReviewSubmissionError::Transport {
                message: "timeout".to_owned(),
            })
        });
    let telemetry = Arc::new(RecordingTelemetrySink::default());
    let mut driver = CommandDriver::new(app_with_submitter(
        Arc::new(submitter),
        Arc::clone(&telemetry),
        100,
    ));
    select_and_write(driver.app_mut(), "Great film");

    driver.send(&AppMsg::ReviewSubmit);
    driver
        .run_until(1, |msg| matches!(msg, AppMsg::ReviewSubmitted { .. }))
        .await;
    driver.abort();

    let app = driver.app();
    assert_eq!(app.draft().text(), "Great film");
    assert!(app.is_form_focused());
    assert_eq!(app.review_phase(), ReviewPhase::Editing);
    assert_eq!(
        app.notification_message(),
        Some("Failed to submit review: review could not be delivered: timeout")
    );
    assert!(review_events(&telemetry).is_empty());
}

#[rstest]
fn submitted_text_is_trimmed(mut app: MovieApp) {
    let mut submitter = MockReviewSubmitter::new();
    submitter
        .expect_submit_review()
        .withf(|_, text| text == "Great film")
        .times(1)
        .returning(|movie_id, text| {
            Ok(crate::review::SubmissionReceipt {
                movie_id: movie_id.to_owned(),
                char_count: text.chars().count(),
            })
        });
    app.services.submitter = Arc::new(submitter);
    select_and_write(&mut app, "  Great film  ");

    let mut commands = app.dispatch(&AppMsg::ReviewSubmit);
    let command = commands.pop().expect("submission command");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime");
    let msg = runtime.block_on(command);

    assert!(msg.is_some_and(|boxed| boxed.is::<AppMsg>()));
}

#[rstest]
fn confirmation_for_previous_movie_leaves_new_draft_alone(mut app: MovieApp) {
    select_and_write(&mut app, "Great film");
    drop(app.dispatch(&AppMsg::ReviewSubmit));
    app.dispatch(&AppMsg::CursorDown);
    select_and_write(&mut app, "Also good");

    let commands = app.dispatch(&AppMsg::ReviewSubmitted {
        movie_id: "1".to_owned(),
        outcome: Ok(crate::review::SubmissionReceipt {
            movie_id: "1".to_owned(),
            char_count: 10,
        }),
    });

    assert_eq!(commands.len(), 1);
    assert_eq!(app.notification_message(), Some(SUBMISSION_SUCCEEDED));
    assert_eq!(app.draft().text(), "Also good");
    assert!(app.is_form_focused());
    assert_eq!(app.review_phase(), ReviewPhase::Editing);
}

#[rstest]
fn editing_after_confirmation_leaves_confirmed_phase(mut app: MovieApp) {
    app.dispatch(&AppMsg::SelectCursorRow);
    app.dispatch(&AppMsg::ReviewSubmitted {
        movie_id: "1".to_owned(),
        outcome: Ok(crate::review::SubmissionReceipt {
            movie_id: "1".to_owned(),
            char_count: 10,
        }),
    });
    assert_eq!(app.review_phase(), ReviewPhase::Confirmed);

    app.dispatch(&AppMsg::ReviewInsertChar('x'));

    assert_eq!(app.review_phase(), ReviewPhase::Editing);
}
