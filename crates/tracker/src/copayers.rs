use derive_more::Display;
use tracing::{debug, info};
use types::{CeremonySnapshot, Copayer, SigningStatus, WalletInfo};

use crate::steps::{PROPOSAL_CREATED, StepState, step_status};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CopayerUpdateReason {
    #[display("seeded")]
    Seeded,
    #[display("creator_signed")]
    CreatorSigned,
    #[display("abort_rollback")]
    AbortRollback,
    #[display("regression_rollback")]
    RegressionRollback,
}

/// A replacement copayer list the host should adopt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopayerUpdate {
    pub reason: CopayerUpdateReason,
    pub copayers: Vec<Copayer>,
}

/// The parts of a snapshot the copayer rules read.
#[derive(Debug, PartialEq, Eq)]
struct EvaluationInputs {
    status: SigningStatus,
    txp_creator_id: Option<String>,
    copayers: Vec<Copayer>,
    wallet: Option<WalletInfo>,
    has_listener: bool,
}

impl EvaluationInputs {
    fn capture(snapshot: &CeremonySnapshot, has_listener: bool) -> Self {
        Self {
            status: snapshot.status,
            txp_creator_id: snapshot.txp_creator_id.clone(),
            copayers: snapshot.copayers.clone(),
            wallet: snapshot.wallet.clone(),
            has_listener,
        }
    }
}

/// Derives signed flags of the ceremony's copayers from each snapshot.
///
/// The incoming list is never modified; every change is a new list. At most
/// one update comes out of an evaluation: seeding only fires on an empty list
/// and the signed-state rules only on a non-empty one. A snapshot whose
/// inputs match the previous evaluation is not evaluated again, so a host
/// that has not yet adopted an emitted list gets no duplicate.
#[derive(Debug, Default)]
pub struct CopayerSignatureTracker {
    rollback_on_regression: bool,
    seeded_empty: bool,
    last_inputs: Option<EvaluationInputs>,
}

impl CopayerSignatureTracker {
    #[must_use]
    pub fn new(rollback_on_regression: bool) -> Self {
        Self {
            rollback_on_regression,
            ..Self::default()
        }
    }

    /// Runs the seeding and signed-state rules against `snapshot`. Both rules
    /// are inert unless the host listens for copayer updates.
    pub fn evaluate(
        &mut self,
        snapshot: &CeremonySnapshot,
        has_listener: bool,
    ) -> Option<CopayerUpdate> {
        let inputs = EvaluationInputs::capture(snapshot, has_listener);
        if self.last_inputs.as_ref() == Some(&inputs) {
            debug!("Copayer inputs unchanged, skipping evaluation");
            return None;
        }
        let previous_status = self
            .last_inputs
            .replace(inputs)
            .map(|previous| previous.status);

        if !snapshot.copayers.is_empty() {
            self.seeded_empty = false;
        }

        if !has_listener {
            return None;
        }

        if let Some(update) = self.seed(snapshot) {
            return Some(update);
        }

        self.apply_signed_state(snapshot, previous_status)
    }

    fn seed(&mut self, snapshot: &CeremonySnapshot) -> Option<CopayerUpdate> {
        let wallet = snapshot.wallet.as_ref()?;
        if !snapshot.copayers.is_empty() || self.seeded_empty {
            return None;
        }

        let copayers = wallet.initial_copayers();
        self.seeded_empty = copayers.is_empty();
        debug!("Seeding {} copayers from wallet", copayers.len());

        Some(CopayerUpdate {
            reason: CopayerUpdateReason::Seeded,
            copayers,
        })
    }

    fn apply_signed_state(
        &self,
        snapshot: &CeremonySnapshot,
        previous_status: Option<SigningStatus>,
    ) -> Option<CopayerUpdate> {
        let creator_id = snapshot.txp_creator_id.as_deref()?;
        if snapshot.copayers.is_empty() {
            return None;
        }

        if snapshot.status == SigningStatus::Error {
            return Self::rollback(snapshot, CopayerUpdateReason::AbortRollback);
        }

        let regressed = previous_status.is_some_and(|prev| snapshot.status.regressed_from(prev));
        if self.rollback_on_regression && regressed {
            return Self::rollback(snapshot, CopayerUpdateReason::RegressionRollback);
        }

        if step_status(PROPOSAL_CREATED, snapshot.status) != StepState::Complete {
            return None;
        }

        Self::sign_creator(&snapshot.copayers, creator_id)
    }

    fn rollback(snapshot: &CeremonySnapshot, reason: CopayerUpdateReason) -> Option<CopayerUpdate> {
        if !snapshot.any_signed() {
            return None;
        }

        info!(
            "Clearing signed state of {} copayers ({})",
            snapshot.copayers.len(),
            reason
        );
        Some(CopayerUpdate {
            reason,
            copayers: snapshot
                .copayers
                .iter()
                .map(|c| c.with_signed(false))
                .collect(),
        })
    }

    fn sign_creator(copayers: &[Copayer], creator_id: &str) -> Option<CopayerUpdate> {
        let mut changed = false;
        let next = copayers
            .iter()
            .map(|c| {
                if c.id != creator_id || c.signed {
                    return c.clone();
                }
                changed = true;
                c.with_signed(true)
            })
            .collect();

        if !changed {
            return None;
        }

        debug!("Marking proposal creator {} as signed", creator_id);
        Some(CopayerUpdate {
            reason: CopayerUpdateReason::CreatorSigned,
            copayers: next,
        })
    }
}
