use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::{interval, sleep};
use tracing::{debug, error, info};
use types::errors::TrackerError;

use crate::{CeremonyInterface, CeremonyInterfaceImpl};

impl CeremonyInterfaceImpl {
    /// Serves requests until every sender is dropped, failing the ceremony if
    /// it is still running when the timeout elapses.
    pub async fn start(&mut self) -> Result<(), TrackerError> {
        info!(
            "[{}] Starting ceremony loop with {}ms polling and {}s timeout",
            self.session.session_id(),
            self.poll_interval.as_millis(),
            self.ceremony_timeout.as_secs()
        );

        let mut poll_interval = interval(self.poll_interval);
        let deadline = sleep(self.ceremony_timeout);
        tokio::pin!(deadline);
        let mut timed_out = false;

        loop {
            tokio::select! {
                _ = poll_interval.tick() => {
                    match self.poll_messages().await {
                        Ok(()) => {}
                        Err(TrackerError::Channel(reason)) => {
                            info!("[{}] Ceremony loop stopping: {}", self.session.session_id(), reason);
                            return Ok(());
                        }
                        Err(e) => error!("Error polling ceremony messages: {}", e),
                    }
                }
                () = &mut deadline, if !timed_out => {
                    timed_out = true;
                    self.enforce_timeout();
                }
            }
        }
    }

    async fn poll_messages(&mut self) -> Result<(), TrackerError> {
        loop {
            match self.message_stream.try_recv() {
                Ok((message, reply)) => {
                    let response = self.handle_message(message).await;
                    let Some(reply) = reply else {
                        continue;
                    };
                    if reply.send(response).is_err() {
                        debug!(
                            "[{}] Requester went away before the response",
                            self.session.session_id()
                        );
                    }
                }
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    return Err(TrackerError::Channel("all senders dropped".to_string()));
                }
            }
        }
    }
}
