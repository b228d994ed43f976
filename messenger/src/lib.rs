use tokio::sync::{mpsc, oneshot};
use types::errors::TrackerError;

/// A request as seen by the serving loop. The reply slot is `None` for
/// notifications.
pub type Request<M, R> = (M, Option<oneshot::Sender<R>>);

pub type Receiver<M, R> = mpsc::Receiver<Request<M, R>>;

/// Requesting half. Every request gets its own reply slot, so replies can
/// never be read by the wrong caller.
pub struct Sender<M, R> {
    tx: mpsc::Sender<Request<M, R>>,
}

impl<M, R> Clone for Sender<M, R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[must_use]
pub fn channel<M, R>(buffer: usize) -> (Sender<M, R>, Receiver<M, R>) {
    let (tx, rx) = mpsc::channel(buffer);
    (Sender { tx }, rx)
}

impl<M, R> Sender<M, R> {
    /// Delivers `message` without waiting for the outcome.
    pub async fn notify(&self, message: M) -> Result<(), TrackerError> {
        self.tx
            .send((message, None))
            .await
            .map_err(|_| TrackerError::Channel("Failed to send message: loop stopped".to_string()))
    }

    pub async fn send_message_with_response(&self, message: M) -> Result<R, TrackerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send((message, Some(reply_tx)))
            .await
            .map_err(|_| TrackerError::Channel("Failed to send message: loop stopped".to_string()))?;

        reply_rx
            .await
            .map_err(|e| TrackerError::Channel(format!("Failed to receive response: {e}")))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
