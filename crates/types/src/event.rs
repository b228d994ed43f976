use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{CopayerSignStatus, SigningProgress, SigningStatus};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEventKind {
    #[display("ready")]
    Ready,
    #[display("processed")]
    Processed,
    #[display("submitted")]
    Submitted,
}

/// Notifications pushed by whoever owns the signing network session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CeremonyEvent {
    StatusChanged {
        status: SigningStatus,
    },
    ProgressUpdated {
        progress: SigningProgress,
    },
    RoundUpdate {
        round: u32,
        kind: RoundEventKind,
    },
    CopayerStatusChanged {
        copayer_id: String,
        status: CopayerSignStatus,
    },
    Failed {
        message: String,
    },
    Completed {
        signature: String,
    },
}

impl CeremonyEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StatusChanged { .. } => "status_changed",
            Self::ProgressUpdated { .. } => "progress_updated",
            Self::RoundUpdate { .. } => "round_update",
            Self::CopayerStatusChanged { .. } => "copayer_status_changed",
            Self::Failed { .. } => "failed",
            Self::Completed { .. } => "completed",
        }
    }
}
