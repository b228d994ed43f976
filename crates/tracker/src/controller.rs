use serde::Serialize;
use tracing::debug;
use types::{
    CeremonySnapshot, Copayer, SigningStatus, copayer_update_metrics, status_transition_metrics,
};

use crate::{
    CopayersCallback, TrackerConfig, VisibilityCallback,
    copayers::{CopayerSignatureTracker, CopayerUpdate},
    labels::{ButtonIndicator, PANEL_TITLE, button_label},
    progress::estimate_progress,
    steps::{Step, StepView, build_steps},
    visibility::Visibility,
};

/// Everything the presentation layer needs to draw the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub status: SigningStatus,
    pub button_label: &'static str,
    pub button_indicator: ButtonIndicator,
    pub progress_percent: u8,
    pub bar_complete: bool,
    pub show_button: bool,
    pub panel_visible: bool,
    pub panel_title: &'static str,
    pub steps: Vec<StepView>,
}

/// Observes a signing ceremony and derives its display state.
///
/// The controller never changes the ceremony status. Hosts push a fresh
/// [`CeremonySnapshot`] through [`update`](Self::update) whenever anything
/// changes and adopt the copayer lists handed to the copayer callback.
pub struct TssProgressController {
    snapshot: CeremonySnapshot,
    tracker: CopayerSignatureTracker,
    visibility: Visibility,
    on_copayers_initialized: Option<CopayersCallback>,
}

impl TssProgressController {
    #[must_use]
    pub fn new(snapshot: CeremonySnapshot) -> Self {
        Self::with_config(snapshot, &TrackerConfig::default())
    }

    #[must_use]
    pub fn with_config(snapshot: CeremonySnapshot, config: &TrackerConfig) -> Self {
        Self {
            snapshot,
            tracker: CopayerSignatureTracker::new(config.rollback_on_regression),
            visibility: Visibility::internal(),
            on_copayers_initialized: None,
        }
    }

    #[must_use]
    pub fn on_copayers_initialized(mut self, callback: CopayersCallback) -> Self {
        self.on_copayers_initialized = Some(callback);
        self
    }

    /// Hands ownership of the visible flag to the host.
    #[must_use]
    pub fn on_visibility_change(mut self, callback: VisibilityCallback) -> Self {
        self.visibility = Visibility::external(callback);
        self
    }

    /// Adopts `snapshot` and re-runs the copayer rules against it. Returns the
    /// list passed to the copayer callback, if one was emitted.
    pub fn update(&mut self, snapshot: CeremonySnapshot) -> Option<Vec<Copayer>> {
        if snapshot.status != self.snapshot.status {
            debug!(
                "Ceremony status {} -> {}",
                self.snapshot.status, snapshot.status
            );
            status_transition_metrics!(snapshot.status);
        }
        self.snapshot = snapshot;

        let CopayerUpdate { reason, copayers } = self
            .tracker
            .evaluate(&self.snapshot, self.on_copayers_initialized.is_some())?;

        copayer_update_metrics!(reason);
        if let Some(callback) = self.on_copayers_initialized.as_mut() {
            callback(copayers.clone());
        }
        Some(copayers)
    }

    pub fn open(&mut self) {
        self.visibility.set(true);
    }

    /// Hides the panel unless signing is in flight. Returns whether the
    /// request was honoured.
    pub fn close(&mut self) -> bool {
        if self.snapshot.status.is_signing_in_flight() {
            debug!(
                "Keeping progress panel open during {}",
                self.snapshot.status
            );
            return false;
        }

        self.visibility.set(false);
        true
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visibility.resolve(self.snapshot.is_modal_visible)
    }

    #[must_use]
    pub const fn show_button(&self) -> bool {
        !self.snapshot.hide_tracker
    }

    #[must_use]
    pub const fn snapshot(&self) -> &CeremonySnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn status(&self) -> SigningStatus {
        self.snapshot.status
    }

    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        button_label(self.snapshot.status, self.snapshot.context)
    }

    #[must_use]
    pub const fn button_indicator(&self) -> ButtonIndicator {
        ButtonIndicator::for_status(self.snapshot.status)
    }

    #[must_use]
    pub fn display_progress(&self) -> u8 {
        estimate_progress(self.snapshot.status, &self.snapshot.progress)
    }

    #[must_use]
    pub fn steps(&self) -> Vec<Step> {
        build_steps(
            &self.snapshot.created_by,
            self.snapshot.date,
            &self.snapshot.copayers,
        )
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let status = self.snapshot.status;
        ViewState {
            status,
            button_label: self.button_label(),
            button_indicator: self.button_indicator(),
            progress_percent: self.display_progress(),
            bar_complete: status == SigningStatus::Complete,
            show_button: self.show_button(),
            panel_visible: self.is_visible(),
            panel_title: PANEL_TITLE,
            steps: self
                .steps()
                .into_iter()
                .enumerate()
                .map(|(index, step)| StepView::from_step(index, step, status))
                .collect(),
        }
    }
}
