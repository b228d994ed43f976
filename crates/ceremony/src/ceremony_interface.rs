use std::time::Duration;

use tracing::{debug, info};
use tracker::TrackerConfig;

use crate::{
    CeremonyHandle, CeremonyMessage, CeremonyResponse,
    session::{CeremonySession, TIMEOUT_MESSAGE},
};

const REQUEST_BUFFER: usize = 100;

#[async_trait::async_trait]
pub trait CeremonyInterface: Send {
    async fn handle_message(&mut self, message: CeremonyMessage) -> CeremonyResponse;
}

pub struct CeremonyInterfaceImpl {
    pub session: CeremonySession,
    pub message_stream: messenger::Receiver<CeremonyMessage, CeremonyResponse>,
    pub ceremony_timeout: Duration,
    pub poll_interval: Duration,
}

impl CeremonyInterfaceImpl {
    #[must_use]
    pub fn new(
        session: CeremonySession,
        config: &TrackerConfig,
    ) -> (Self, CeremonyHandle) {
        let (tx, rx) = messenger::channel(REQUEST_BUFFER);
        (
            Self {
                session,
                message_stream: rx,
                ceremony_timeout: config.ceremony_timeout(),
                poll_interval: config.poll_interval(),
            },
            CeremonyHandle::new(tx),
        )
    }

    /// Fails the ceremony if it has not reached `complete` or `error`.
    /// Returns whether the timeout took effect.
    pub fn enforce_timeout(&mut self) -> bool {
        if self.session.status().is_finished() {
            debug!(
                "[{}] Timeout reached after ceremony finished",
                self.session.session_id()
            );
            return false;
        }

        info!(
            "[{}] No completion within {}s",
            self.session.session_id(),
            self.ceremony_timeout.as_secs()
        );
        self.session.fail(TIMEOUT_MESSAGE);
        true
    }
}

#[async_trait::async_trait]
impl CeremonyInterface for CeremonyInterfaceImpl {
    async fn handle_message(&mut self, message: CeremonyMessage) -> CeremonyResponse {
        match message {
            CeremonyMessage::Event { event } => {
                debug!("[{}] Event {}", self.session.session_id(), event.name());
                CeremonyResponse::Event {
                    copayers_changed: self.session.apply(event),
                }
            }
            CeremonyMessage::RawStatus { status } => CeremonyResponse::Event {
                copayers_changed: self.session.apply_raw_status(&status),
            },
            CeremonyMessage::OpenPanel => CeremonyResponse::Panel {
                visible: self.session.open_panel(),
            },
            CeremonyMessage::ClosePanel => CeremonyResponse::Panel {
                visible: self.session.close_panel(),
            },
            CeremonyMessage::GetViewState => CeremonyResponse::ViewState {
                view: Box::new(self.session.view_state()),
            },
        }
    }
}
