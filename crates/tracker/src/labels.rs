use serde::Serialize;
use tracing::warn;
use types::{SigningStatus, TrackerContext};

pub const PANEL_TITLE: &str = "Transaction Progress";
const FALLBACK_LABEL: &str = "Waiting to initialize";

/// Phase label shown on the collapsed progress button.
#[must_use]
pub const fn button_label(status: SigningStatus, context: Option<TrackerContext>) -> &'static str {
    match status {
        SigningStatus::Initializing => match context {
            Some(TrackerContext::SwapCrypto) => "TSS Waiting to initialize",
            None => FALLBACK_LABEL,
        },
        SigningStatus::WaitingForCosigners => "Waiting for co-signers",
        SigningStatus::SignatureGeneration => "Signature Generation",
        SigningStatus::Broadcasting => "Broadcast Transaction",
        SigningStatus::Complete => "Complete",
        SigningStatus::Error => FALLBACK_LABEL,
    }
}

#[must_use]
pub fn button_label_wire(raw_status: &str, context: Option<TrackerContext>) -> &'static str {
    match raw_status.parse::<SigningStatus>() {
        Ok(status) => button_label(status, context),
        Err(e) => {
            warn!("Rendering fallback label for upstream status: {}", e);
            FALLBACK_LABEL
        }
    }
}

/// Icon state of the collapsed progress button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonIndicator {
    Success,
    Pending,
    Failed,
}

impl ButtonIndicator {
    #[must_use]
    pub const fn for_status(status: SigningStatus) -> Self {
        match status {
            SigningStatus::Complete => Self::Success,
            SigningStatus::Error => Self::Failed,
            SigningStatus::Initializing
            | SigningStatus::WaitingForCosigners
            | SigningStatus::SignatureGeneration
            | SigningStatus::Broadcasting => Self::Pending,
        }
    }
}
