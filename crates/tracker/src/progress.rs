use tracing::warn;
use types::{SigningProgress, SigningStatus};

const SIGNATURE_PHASE_BASE: u8 = 50;
const SIGNATURE_PHASE_CEILING: u8 = 75;

/// Percentage shown on the progress bar for a ceremony status.
///
/// Inside `signature_generation` the value moves linearly from 50 to 75 with
/// the round counters (floored). With no round total yet it stays at 50, which
/// is a heuristic for the gap before the driver reports its first round.
#[must_use]
pub fn estimate_progress(status: SigningStatus, progress: &SigningProgress) -> u8 {
    match status {
        SigningStatus::Initializing | SigningStatus::Error => 0,
        SigningStatus::WaitingForCosigners => 25,
        SigningStatus::SignatureGeneration => signature_phase_progress(progress),
        SigningStatus::Broadcasting => 75,
        SigningStatus::Complete => 100,
    }
}

fn signature_phase_progress(progress: &SigningProgress) -> u8 {
    if progress.total_rounds == 0 {
        return SIGNATURE_PHASE_BASE;
    }

    let span = SIGNATURE_PHASE_CEILING - SIGNATURE_PHASE_BASE;
    let step = u64::from(progress.bounded_round()) * u64::from(span)
        / u64::from(progress.total_rounds);
    SIGNATURE_PHASE_BASE + u8::try_from(step).unwrap_or(span).min(span)
}

/// Same as [`estimate_progress`] for a status still in wire form. Unknown
/// values render as 0.
#[must_use]
pub fn estimate_progress_wire(raw_status: &str, progress: &SigningProgress) -> u8 {
    match raw_status.parse::<SigningStatus>() {
        Ok(status) => estimate_progress(status, progress),
        Err(e) => {
            warn!("Rendering progress 0 for upstream status: {}", e);
            0
        }
    }
}
