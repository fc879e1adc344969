use std::fmt;

use tokio::sync::mpsc;

use crate::target::TargetGroup;

#[derive(Debug)]
pub struct ClosedError;

impl fmt::Display for ClosedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Receiver is closed.")
    }
}

impl std::error::Error for ClosedError {}

/// The sending half of the channel between a discovery and its consumer.
///
/// There is exactly one producer, and at most one group in flight; `send`
/// waits for capacity when the consumer applies backpressure.
#[derive(Clone, Debug)]
pub struct Pipeline {
    inner: mpsc::Sender<TargetGroup>,
}

impl Pipeline {
    pub fn from_sender(inner: mpsc::Sender<TargetGroup>) -> Self {
        Self { inner }
    }

    pub fn new_with_buffer(size: usize) -> (Self, mpsc::Receiver<TargetGroup>) {
        let (tx, rx) = mpsc::channel(size);

        (Self::from_sender(tx), rx)
    }

    /// Deliver one group, blocking until the consumer has room for it. A
    /// group is handed over as a whole or not at all.
    pub async fn send(&mut self, group: TargetGroup) -> Result<(), ClosedError> {
        self.inner.send(group).await.map_err(|_| ClosedError)
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Pipeline {
    pub fn new_test() -> (Self, mpsc::Receiver<TargetGroup>) {
        Self::new_with_buffer(1024)
    }
}
