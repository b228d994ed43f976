use crate::progress::{estimate_progress, estimate_progress_wire};
use types::{SigningProgress, SigningStatus};

#[test]
fn test_fixed_phase_percentages() {
    let progress = SigningProgress::default();

    assert_eq!(estimate_progress(SigningStatus::Initializing, &progress), 0);
    assert_eq!(
        estimate_progress(SigningStatus::WaitingForCosigners, &progress),
        25
    );
    assert_eq!(estimate_progress(SigningStatus::Broadcasting, &progress), 75);
    assert_eq!(estimate_progress(SigningStatus::Complete, &progress), 100);
    assert_eq!(estimate_progress(SigningStatus::Error, &progress), 0);
}

#[test]
fn test_signature_generation_interpolates_rounds() {
    let status = SigningStatus::SignatureGeneration;

    assert_eq!(estimate_progress(status, &SigningProgress::new(0, 4)), 50);
    assert_eq!(estimate_progress(status, &SigningProgress::new(1, 4)), 56);
    assert_eq!(estimate_progress(status, &SigningProgress::new(2, 4)), 62);
    assert_eq!(estimate_progress(status, &SigningProgress::new(4, 4)), 75);
}

#[test]
fn test_signature_generation_without_rounds_stays_at_base() {
    assert_eq!(
        estimate_progress(
            SigningStatus::SignatureGeneration,
            &SigningProgress::new(3, 0)
        ),
        50
    );
}

#[test]
fn test_progress_monotonic_within_signature_phase() {
    for total in 1..=12 {
        let mut last = 0;
        for round in 0..=total {
            let percent = estimate_progress(
                SigningStatus::SignatureGeneration,
                &SigningProgress::new(round, total),
            );
            assert!((50..=75).contains(&percent));
            assert!(percent >= last);
            last = percent;
        }
    }
}

#[test]
fn test_overshooting_round_never_passes_broadcast() {
    let percent = estimate_progress(
        SigningStatus::SignatureGeneration,
        &SigningProgress::new(9, 4),
    );
    assert_eq!(percent, 75);
}

#[test]
fn test_progress_ordering_across_phases() {
    let max_round = SigningProgress::new(4, 4);
    let sequence = [
        estimate_progress(SigningStatus::Initializing, &max_round),
        estimate_progress(SigningStatus::WaitingForCosigners, &max_round),
        estimate_progress(SigningStatus::SignatureGeneration, &max_round),
        estimate_progress(SigningStatus::Broadcasting, &max_round),
        estimate_progress(SigningStatus::Complete, &max_round),
    ];

    assert_eq!(sequence, [0, 25, 75, 75, 100]);
    assert!(sequence[0] < sequence[1]);
    assert!(sequence[1] < sequence[2]);
    assert!(sequence[2] <= sequence[3]);
    assert!(sequence[3] < sequence[4]);
}

#[test]
fn test_unrecognized_wire_status_renders_zero() {
    let progress = SigningProgress::new(2, 4);

    assert_eq!(estimate_progress_wire("signature_generation", &progress), 62);
    assert_eq!(estimate_progress_wire("timed_out", &progress), 0);
    assert_eq!(estimate_progress_wire("", &progress), 0);
}
