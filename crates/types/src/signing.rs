use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Phase of a TSS co-signing ceremony as reported by the signing driver.
///
/// ```text
/// initializing → waiting_for_cosigners → signature_generation → broadcasting → complete
///       │                 │                        │                   │
///       └─────────────────┴────────────────────────┴───────────────────┘
///                                 (→ error)
/// ```
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningStatus {
    #[display("initializing")]
    Initializing,
    #[display("waiting_for_cosigners")]
    WaitingForCosigners,
    #[display("signature_generation")]
    SignatureGeneration,
    #[display("broadcasting")]
    Broadcasting,
    #[display("complete")]
    Complete,
    #[display("error")]
    Error,
}

impl SigningStatus {
    /// Linear phase order. `Error` is an interrupt and has no place in it.
    pub const ORDERED: [Self; 5] = [
        Self::Initializing,
        Self::WaitingForCosigners,
        Self::SignatureGeneration,
        Self::Broadcasting,
        Self::Complete,
    ];

    /// Position of the status in [`Self::ORDERED`], `None` for `Error`.
    #[must_use]
    pub const fn phase_index(self) -> Option<usize> {
        match self {
            Self::Initializing => Some(0),
            Self::WaitingForCosigners => Some(1),
            Self::SignatureGeneration => Some(2),
            Self::Broadcasting => Some(3),
            Self::Complete => Some(4),
            Self::Error => None,
        }
    }

    /// Statuses during which the in-flight signing cannot be walked away from.
    #[must_use]
    pub const fn is_signing_in_flight(self) -> bool {
        matches!(
            self,
            Self::SignatureGeneration | Self::Broadcasting | Self::Complete
        )
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }

    /// True when `self` sits earlier in the phase order than `previous`.
    /// Transitions into or out of `Error` are never regressions.
    #[must_use]
    pub fn regressed_from(self, previous: Self) -> bool {
        match (self.phase_index(), previous.phase_index()) {
            (Some(current), Some(prev)) => current < prev,
            _ => false,
        }
    }
}

impl FromStr for SigningStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "initializing" => Ok(Self::Initializing),
            "waiting_for_cosigners" => Ok(Self::WaitingForCosigners),
            "signature_generation" => Ok(Self::SignatureGeneration),
            "broadcasting" => Ok(Self::Broadcasting),
            "complete" => Ok(Self::Complete),
            "error" => Ok(Self::Error),
            other => Err(TrackerError::UnrecognizedStatus(other.to_string())),
        }
    }
}

/// Round counters inside the `signature_generation` phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningProgress {
    pub current_round: u32,
    pub total_rounds: u32,
}

impl SigningProgress {
    #[must_use]
    pub const fn new(current_round: u32, total_rounds: u32) -> Self {
        Self {
            current_round,
            total_rounds,
        }
    }

    /// Current round clamped to the total.
    #[must_use]
    pub fn bounded_round(&self) -> u32 {
        self.current_round.min(self.total_rounds)
    }
}
