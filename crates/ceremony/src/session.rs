use std::collections::BTreeSet;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracker::{TrackerConfig, TssProgressController, ViewState};
use types::{
    CeremonyEvent, CeremonySnapshot, Copayer, CopayerSignStatus, RoundEventKind, SigningProgress,
    SigningStatus, progress_metrics,
};
use uuid::Uuid;

/// Upper bound on controller re-evaluations after a single event. Each pass
/// can emit at most one copayer list and a fresh list settles in two.
const MAX_SETTLE_PASSES: usize = 8;

pub const TIMEOUT_MESSAGE: &str = "TSS signing timeout - co-signers did not respond in time";

/// Host-side state for one signing ceremony.
///
/// Owns the snapshot fed to the [`TssProgressController`] and adopts every
/// copayer list the controller emits, re-evaluating until nothing changes.
pub struct CeremonySession {
    session_id: String,
    snapshot: CeremonySnapshot,
    controller: TssProgressController,
    copayer_rx: mpsc::UnboundedReceiver<Vec<Copayer>>,
    signature_rounds: u32,
    joined: BTreeSet<String>,
    last_error: Option<String>,
    signature: Option<String>,
}

impl CeremonySession {
    #[must_use]
    pub fn new(
        proposal_id: Option<&str>,
        snapshot: CeremonySnapshot,
        config: &TrackerConfig,
    ) -> Self {
        let session_id = proposal_id.map_or_else(
            || format!("sign-{}", Uuid::new_v4()),
            |id| format!("sign-{id}"),
        );

        let (copayer_tx, copayer_rx) = mpsc::unbounded_channel();
        let controller = TssProgressController::with_config(snapshot.clone(), config)
            .on_copayers_initialized(Box::new(move |copayers| {
                if copayer_tx.send(copayers).is_err() {
                    warn!("Copayer update dropped, session is gone");
                }
            }));

        let mut session = Self {
            session_id,
            snapshot,
            controller,
            copayer_rx,
            signature_rounds: config.signature_rounds,
            joined: BTreeSet::new(),
            last_error: None,
            signature: None,
        };
        session.settle();
        info!("[{}] Tracking signing ceremony", session.session_id);
        session
    }

    /// Applies a driver event. Returns whether the copayer list changed.
    pub fn apply(&mut self, event: CeremonyEvent) -> bool {
        let id = &self.session_id;
        match event {
            CeremonyEvent::StatusChanged { status } => {
                debug!("[{id}] Status changed: {status}");
                self.snapshot.status = status;
            }
            CeremonyEvent::ProgressUpdated { progress } => {
                debug!(
                    "[{id}] Progress: Round {}/{}",
                    progress.current_round, progress.total_rounds
                );
                self.snapshot.progress = progress;
            }
            CeremonyEvent::RoundUpdate { round, kind } => {
                debug!("[{id}] Round {round} {kind}");
                if kind == RoundEventKind::Ready {
                    if round == 1 {
                        self.snapshot.status = SigningStatus::SignatureGeneration;
                    }
                    self.snapshot.progress = SigningProgress::new(round, self.signature_rounds);
                }
            }
            CeremonyEvent::CopayerStatusChanged { copayer_id, status } => {
                debug!("[{id}] Copayer {copayer_id} {status}");
                self.copayer_status_changed(&copayer_id, status);
            }
            CeremonyEvent::Failed { message } => {
                return self.fail(message);
            }
            CeremonyEvent::Completed { signature } => {
                debug!("[{id}] Signature received");
                self.signature = Some(signature);
            }
        }

        self.settle()
    }

    /// Applies a status that arrived in wire form. Unknown values are logged
    /// and leave the current render untouched.
    pub fn apply_raw_status(&mut self, raw_status: &str) -> bool {
        match raw_status.parse::<SigningStatus>() {
            Ok(status) => self.apply(CeremonyEvent::StatusChanged { status }),
            Err(e) => {
                warn!("[{}] Ignoring upstream status: {}", self.session_id, e);
                false
            }
        }
    }

    /// Moves the ceremony into `error`, rolls back copayer state and hides the
    /// panel.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        error!("[{}] Error: {}", self.session_id, message);

        self.snapshot.status = SigningStatus::Error;
        self.last_error = Some(message);
        let changed = self.settle();
        self.controller.close();
        changed
    }

    fn copayer_status_changed(&mut self, copayer_id: &str, status: CopayerSignStatus) {
        match status {
            CopayerSignStatus::Joined => {
                self.joined.insert(copayer_id.to_string());
            }
            CopayerSignStatus::Signed => {
                if !self.snapshot.copayers.iter().any(|c| c.id == copayer_id) {
                    warn!(
                        "[{}] Signature from unknown copayer {}",
                        self.session_id, copayer_id
                    );
                    return;
                }
                self.joined.insert(copayer_id.to_string());
                self.snapshot.copayers = self
                    .snapshot
                    .copayers
                    .iter()
                    .map(|c| {
                        if c.id == copayer_id {
                            c.with_signed(true)
                        } else {
                            c.clone()
                        }
                    })
                    .collect();
            }
        }
    }

    fn settle(&mut self) -> bool {
        let mut changed = false;

        for _ in 0..MAX_SETTLE_PASSES {
            self.controller.update(self.snapshot.clone());

            let mut emitted = false;
            while let Ok(copayers) = self.copayer_rx.try_recv() {
                self.snapshot.copayers = copayers;
                emitted = true;
            }

            if !emitted {
                progress_metrics!(self.controller.display_progress(), self.session_id);
                return changed;
            }
            changed = true;
        }

        warn!(
            "[{}] Copayer state still changing after {} passes",
            self.session_id, MAX_SETTLE_PASSES
        );
        changed
    }

    pub fn open_panel(&mut self) -> bool {
        self.controller.open();
        self.controller.is_visible()
    }

    pub fn close_panel(&mut self) -> bool {
        self.controller.close();
        self.controller.is_visible()
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.controller.view_state()
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub const fn status(&self) -> SigningStatus {
        self.snapshot.status
    }

    #[must_use]
    pub const fn snapshot(&self) -> &CeremonySnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn copayers(&self) -> &[Copayer] {
        &self.snapshot.copayers
    }

    #[must_use]
    pub fn has_joined(&self, copayer_id: &str) -> bool {
        self.joined.contains(copayer_id)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}
