use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer: at most one pending timer, replaced on every
/// schedule. When a timer survives its delay the action is sent on the channel.
pub struct Debouncer<A: Send + 'static> {
    sender: mpsc::UnboundedSender<A>,
    pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub const fn new(sender: mpsc::UnboundedSender<A>) -> Self {
        Self {
            sender,
            pending: None,
        }
    }

    pub fn schedule(&mut self, delay: Duration, action: A) {
        self.cancel();

        let sender = self.sender.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(action).is_err() {
                log::debug!("⏱️  Debounced action dropped: receiver closed");
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<A: Send + 'static> Drop for Debouncer<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
