use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Copayer, SigningProgress, SigningStatus, WalletInfo};

/// Screen the tracker is embedded in, where it changes wording.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerContext {
    #[display("swapCrypto")]
    SwapCrypto,
}

/// Everything the tracker derives its view state from. Rebuilt by the host on
/// every change and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonySnapshot {
    pub status: SigningStatus,
    #[serde(default)]
    pub progress: SigningProgress,
    pub created_by: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub copayers: Vec<Copayer>,
    #[serde(default)]
    pub wallet: Option<WalletInfo>,
    #[serde(default)]
    pub txp_creator_id: Option<String>,
    #[serde(default)]
    pub context: Option<TrackerContext>,
    #[serde(default)]
    pub is_modal_visible: Option<bool>,
    #[serde(default)]
    pub hide_tracker: bool,
}

impl CeremonySnapshot {
    #[must_use]
    pub fn new(created_by: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            status: SigningStatus::Initializing,
            progress: SigningProgress::default(),
            created_by: created_by.into(),
            date,
            copayers: Vec::new(),
            wallet: None,
            txp_creator_id: None,
            context: None,
            is_modal_visible: None,
            hide_tracker: false,
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: SigningStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, progress: SigningProgress) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn with_copayers(mut self, copayers: Vec<Copayer>) -> Self {
        self.copayers = copayers;
        self
    }

    #[must_use]
    pub fn with_wallet(mut self, wallet: WalletInfo) -> Self {
        self.wallet = Some(wallet);
        self
    }

    #[must_use]
    pub fn with_txp_creator(mut self, creator_id: impl Into<String>) -> Self {
        self.txp_creator_id = Some(creator_id.into());
        self
    }

    #[must_use]
    pub const fn with_context(mut self, context: TrackerContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn any_signed(&self) -> bool {
        self.copayers.iter().any(|c| c.signed)
    }
}
