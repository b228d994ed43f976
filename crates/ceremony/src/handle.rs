use tracker::ViewState;
use types::{CeremonyEvent, errors::TrackerError};

use crate::{CeremonyMessage, CeremonyResponse};

/// Typed client for a running ceremony loop.
#[derive(Clone)]
pub struct CeremonyHandle {
    tx: messenger::Sender<CeremonyMessage, CeremonyResponse>,
}

impl CeremonyHandle {
    pub(crate) const fn new(tx: messenger::Sender<CeremonyMessage, CeremonyResponse>) -> Self {
        Self { tx }
    }

    /// Applies a driver event. Returns whether the copayer list changed.
    pub async fn apply_event(&self, event: CeremonyEvent) -> Result<bool, TrackerError> {
        match self.request(CeremonyMessage::Event { event }).await? {
            CeremonyResponse::Event { copayers_changed } => Ok(copayers_changed),
            other => Err(unexpected("Event", &other)),
        }
    }

    /// Fires a driver event without waiting for it to be applied.
    pub async fn notify_event(&self, event: CeremonyEvent) -> Result<(), TrackerError> {
        self.tx.notify(CeremonyMessage::Event { event }).await
    }

    pub async fn apply_raw_status(&self, status: impl Into<String>) -> Result<bool, TrackerError> {
        let message = CeremonyMessage::RawStatus {
            status: status.into(),
        };
        match self.request(message).await? {
            CeremonyResponse::Event { copayers_changed } => Ok(copayers_changed),
            other => Err(unexpected("RawStatus", &other)),
        }
    }

    /// Returns whether the panel is visible afterwards.
    pub async fn open_panel(&self) -> Result<bool, TrackerError> {
        self.panel(CeremonyMessage::OpenPanel).await
    }

    /// Returns whether the panel is visible afterwards, which stays `true`
    /// while signing is in flight.
    pub async fn close_panel(&self) -> Result<bool, TrackerError> {
        self.panel(CeremonyMessage::ClosePanel).await
    }

    pub async fn view_state(&self) -> Result<ViewState, TrackerError> {
        match self.request(CeremonyMessage::GetViewState).await? {
            CeremonyResponse::ViewState { view } => Ok(*view),
            other => Err(unexpected("GetViewState", &other)),
        }
    }

    async fn panel(&self, message: CeremonyMessage) -> Result<bool, TrackerError> {
        match self.request(message).await? {
            CeremonyResponse::Panel { visible } => Ok(visible),
            other => Err(unexpected("Panel", &other)),
        }
    }

    async fn request(&self, message: CeremonyMessage) -> Result<CeremonyResponse, TrackerError> {
        self.tx.send_message_with_response(message).await
    }
}

fn unexpected(request: &str, response: &CeremonyResponse) -> TrackerError {
    TrackerError::Channel(format!("Unexpected response to {request}: {response:?}"))
}
