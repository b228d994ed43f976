use super::{proposal_date, three_copayers};
use crate::steps::{
    STEP_COUNT, StepIcon, StepPayload, StepState, StepView, build_steps, step_status,
};
use types::SigningStatus;

fn states(status: SigningStatus) -> Vec<StepState> {
    (0..STEP_COUNT).map(|i| step_status(i, status)).collect()
}

#[test]
fn test_initializing_activates_first_step() {
    assert_eq!(
        states(SigningStatus::Initializing),
        vec![
            StepState::Active,
            StepState::Pending,
            StepState::Pending,
            StepState::Pending
        ]
    );
}

#[test]
fn test_waiting_for_cosigners_completes_proposal_step() {
    assert_eq!(
        states(SigningStatus::WaitingForCosigners),
        vec![
            StepState::Complete,
            StepState::Active,
            StepState::Pending,
            StepState::Pending
        ]
    );
}

#[test]
fn test_complete_status_completes_every_step() {
    assert_eq!(
        states(SigningStatus::Complete),
        vec![StepState::Complete; STEP_COUNT]
    );
    assert_eq!(
        states(SigningStatus::Broadcasting),
        vec![
            StepState::Complete,
            StepState::Complete,
            StepState::Complete,
            StepState::Active
        ]
    );
}

#[test]
fn test_error_leaves_every_step_pending() {
    assert_eq!(
        states(SigningStatus::Error),
        vec![StepState::Pending; STEP_COUNT]
    );
}

#[test]
fn test_build_steps_payloads() {
    let steps = build_steps("Alice", proposal_date(), &three_copayers());

    assert_eq!(steps.len(), STEP_COUNT);
    assert_eq!(steps[0].title, "Proposal Created");
    assert_eq!(
        steps[0].payload,
        StepPayload::Proposal {
            created_by: "Alice".to_string(),
            date: proposal_date(),
        }
    );
    assert_eq!(
        steps[1].payload,
        StepPayload::Copayers {
            copayers: three_copayers()
        }
    );
    assert_eq!(steps[2].payload, StepPayload::None);
    assert_eq!(steps[3].title, "Broadcast Transaction");
    assert_eq!(steps[3].payload, StepPayload::None);
}

#[test]
fn test_step_icons() {
    assert_eq!(StepIcon::for_step(0, StepState::Complete), StepIcon::Success);
    assert_eq!(StepIcon::for_step(2, StepState::Active), StepIcon::Refresh);
    assert_eq!(StepIcon::for_step(1, StepState::Active), StepIcon::Clock);
    assert_eq!(StepIcon::for_step(3, StepState::Pending), StepIcon::Number(4));
}

#[test]
fn test_step_view_connectors_and_timestamp() {
    let status = SigningStatus::WaitingForCosigners;
    let views: Vec<StepView> = build_steps("Alice", proposal_date(), &three_copayers())
        .into_iter()
        .enumerate()
        .map(|(i, step)| StepView::from_step(i, step, status))
        .collect();

    assert_eq!(views[0].connector_complete, Some(true));
    assert_eq!(views[1].connector_complete, Some(false));
    assert_eq!(views[3].connector_complete, None);

    assert_eq!(views[0].subtitle.as_deref(), Some("Alice"));
    assert!(views[0].show_timestamp);
    assert_eq!(views[1].copayers.len(), 3);
    assert!(!views[2].show_timestamp);
}

#[test]
fn test_timestamp_hidden_while_initializing_or_failed() {
    for status in [SigningStatus::Initializing, SigningStatus::Error] {
        let step = build_steps("Alice", proposal_date(), &[]).remove(0);
        let view = StepView::from_step(0, step, status);

        assert_eq!(view.timestamp, Some(proposal_date()));
        assert!(!view.show_timestamp);
    }
}
