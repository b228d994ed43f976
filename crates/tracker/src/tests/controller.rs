use std::sync::{Arc, Mutex};

use super::{proposal_date, snapshot, three_copayers, wallet};
use crate::{ButtonIndicator, StepIcon, StepState, TrackerConfig, TssProgressController};
use types::{Copayer, SigningProgress, SigningStatus, TrackerContext};

type Emitted = Arc<Mutex<Vec<Vec<Copayer>>>>;

fn listening_controller() -> (TssProgressController, Emitted) {
    let emitted: Emitted = Arc::default();
    let sink = emitted.clone();
    let controller = TssProgressController::new(snapshot())
        .on_copayers_initialized(Box::new(move |copayers| sink.lock().unwrap().push(copayers)));
    (controller, emitted)
}

fn externally_visible_controller() -> (TssProgressController, Arc<Mutex<Vec<bool>>>) {
    let requests: Arc<Mutex<Vec<bool>>> = Arc::default();
    let sink = requests.clone();
    let controller = TssProgressController::new(snapshot())
        .on_visibility_change(Box::new(move |visible| sink.lock().unwrap().push(visible)));
    (controller, requests)
}

#[test]
fn test_seeding_emits_once() {
    let (mut controller, emitted) = listening_controller();

    let seeded = controller
        .update(snapshot().with_wallet(wallet()))
        .unwrap();
    assert_eq!(seeded, three_copayers());

    let settled = snapshot().with_wallet(wallet()).with_copayers(seeded);
    assert!(controller.update(settled.clone()).is_none());
    assert!(controller.update(settled).is_none());

    assert_eq!(emitted.lock().unwrap().len(), 1);
}

#[test]
fn test_creator_flip_invokes_callback_once() {
    let (mut controller, emitted) = listening_controller();
    let snap = snapshot()
        .with_status(SigningStatus::WaitingForCosigners)
        .with_copayers(three_copayers())
        .with_txp_creator("c2");

    controller.update(snap.clone());

    let emitted = emitted.lock().unwrap();
    assert_eq!(emitted.len(), 1);
    let signed: Vec<bool> = emitted[0].iter().map(|c| c.signed).collect();
    assert_eq!(signed, vec![false, true, false]);
    assert!(!snap.any_signed());
}

#[test]
fn test_repeated_seed_before_host_adopts_list() {
    let (mut controller, emitted) = listening_controller();
    let snap = snapshot().with_wallet(wallet());

    assert!(controller.update(snap.clone()).is_some());
    assert!(controller.update(snap).is_none());

    assert_eq!(emitted.lock().unwrap().len(), 1);
}

#[test]
fn test_repeated_creator_flip_before_host_adopts_list() {
    let (mut controller, emitted) = listening_controller();
    let snap = snapshot()
        .with_status(SigningStatus::WaitingForCosigners)
        .with_copayers(three_copayers())
        .with_txp_creator("c2");

    assert!(controller.update(snap.clone()).is_some());
    assert!(controller.update(snap.clone()).is_none());
    assert!(controller.update(snap).is_none());

    assert_eq!(emitted.lock().unwrap().len(), 1);
}

#[test]
fn test_abort_rollback_skips_creator_rule() {
    let (mut controller, emitted) = listening_controller();
    let mut copayers = three_copayers();
    copayers[1].signed = true;

    controller.update(
        snapshot()
            .with_status(SigningStatus::Error)
            .with_copayers(copayers)
            .with_txp_creator("c2"),
    );

    let emitted = emitted.lock().unwrap();
    assert_eq!(emitted.len(), 1);
    assert!(emitted[0].iter().all(|c| !c.signed));
}

#[test]
fn test_without_listener_copayers_are_left_alone() {
    let mut controller = TssProgressController::new(snapshot());

    let update = controller.update(
        snapshot()
            .with_status(SigningStatus::Broadcasting)
            .with_wallet(wallet())
            .with_txp_creator("c1"),
    );

    assert!(update.is_none());
}

#[test]
fn test_internal_visibility_open_close() {
    let mut controller = TssProgressController::new(snapshot());
    assert!(!controller.is_visible());

    controller.open();
    assert!(controller.is_visible());

    controller.update(snapshot().with_status(SigningStatus::WaitingForCosigners));
    assert!(controller.close());
    assert!(!controller.is_visible());
}

#[test]
fn test_close_ignored_while_signing_in_flight() {
    let mut controller = TssProgressController::new(snapshot());
    controller.open();

    for status in [
        SigningStatus::SignatureGeneration,
        SigningStatus::Broadcasting,
        SigningStatus::Complete,
    ] {
        controller.update(snapshot().with_status(status));
        assert!(!controller.close());
        assert!(controller.is_visible());
    }

    controller.update(snapshot().with_status(SigningStatus::Error));
    assert!(controller.close());
    assert!(!controller.is_visible());
}

#[test]
fn test_external_visibility_goes_through_callback() {
    let (mut controller, requests) = externally_visible_controller();

    controller.open();
    assert_eq!(*requests.lock().unwrap(), vec![true]);
    // The host has not passed the flag back yet.
    assert!(!controller.is_visible());

    let mut visible = snapshot().with_status(SigningStatus::Broadcasting);
    visible.is_modal_visible = Some(true);
    controller.update(visible);
    assert!(controller.is_visible());

    assert!(!controller.close());
    assert_eq!(*requests.lock().unwrap(), vec![true]);
    assert!(controller.is_visible());

    let mut waiting = snapshot().with_status(SigningStatus::WaitingForCosigners);
    waiting.is_modal_visible = Some(true);
    controller.update(waiting);
    assert!(controller.close());
    assert_eq!(*requests.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_label_follows_context() {
    let mut controller = TssProgressController::new(snapshot());
    assert_eq!(controller.button_label(), "Waiting to initialize");

    controller.update(snapshot().with_context(TrackerContext::SwapCrypto));
    assert_eq!(controller.button_label(), "TSS Waiting to initialize");

    controller.update(
        snapshot()
            .with_context(TrackerContext::SwapCrypto)
            .with_status(SigningStatus::Complete),
    );
    assert_eq!(controller.button_label(), "Complete");
}

#[test]
fn test_display_progress_delegates_to_estimator() {
    let mut controller = TssProgressController::new(snapshot());
    controller.update(
        snapshot()
            .with_status(SigningStatus::SignatureGeneration)
            .with_progress(SigningProgress::new(2, 4)),
    );

    assert_eq!(controller.display_progress(), 62);
}

#[test]
fn test_steps_carry_payloads() {
    let mut controller = TssProgressController::new(snapshot());
    controller.update(snapshot().with_copayers(three_copayers()));

    let steps = controller.steps();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1].title, "Waiting for co-signers");
}

#[test]
fn test_view_state_during_signature_generation() {
    let config = TrackerConfig::default();
    let mut controller = TssProgressController::with_config(snapshot(), &config);
    controller.open();
    controller.update(
        snapshot()
            .with_status(SigningStatus::SignatureGeneration)
            .with_progress(SigningProgress::new(1, 4))
            .with_copayers(three_copayers()),
    );

    let view = controller.view_state();

    assert_eq!(view.status, SigningStatus::SignatureGeneration);
    assert_eq!(view.button_label, "Signature Generation");
    assert_eq!(view.button_indicator, ButtonIndicator::Pending);
    assert_eq!(view.progress_percent, 56);
    assert!(!view.bar_complete);
    assert!(view.show_button);
    assert!(view.panel_visible);
    assert_eq!(view.panel_title, "Transaction Progress");
    assert_eq!(view.steps[2].state, StepState::Active);
    assert_eq!(view.steps[2].icon, StepIcon::Refresh);
    assert_eq!(view.steps[0].timestamp, Some(proposal_date()));
    assert_eq!(view.steps[1].copayers.len(), 3);
}

#[test]
fn test_view_state_for_failed_ceremony() {
    let mut controller = TssProgressController::new(snapshot());
    let mut failed = snapshot().with_status(SigningStatus::Error);
    failed.hide_tracker = true;
    controller.update(failed);

    let view = controller.view_state();

    assert_eq!(view.button_indicator, ButtonIndicator::Failed);
    assert_eq!(view.progress_percent, 0);
    assert!(!view.show_button);
    assert!(view.steps.iter().all(|s| s.state == StepState::Pending));
}

#[test]
fn test_view_state_serializes() {
    let controller = TssProgressController::new(snapshot());

    let json = serde_json::to_value(controller.view_state()).unwrap();

    assert_eq!(json["status"], "initializing");
    assert_eq!(json["button_indicator"], "pending");
    assert_eq!(json["steps"][0]["icon"]["kind"], "clock");
    assert_eq!(json["steps"][3]["icon"]["value"], 4);
}
