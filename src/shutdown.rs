use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::ready;
use tripwire::{Trigger, Tripwire};

/// When this token goes out of scope and its internal refcount goes to 0,
/// the discovery holding it has finished executing and the completion
/// tripwire held by the caller resolves. The discovery must keep at least
/// one copy alive until it is about to return.
#[derive(Clone)]
pub struct ShutdownSignalToken {
    _complete: Arc<Trigger>,
}

impl ShutdownSignalToken {
    fn new(trigger: Trigger) -> Self {
        Self {
            _complete: Arc::new(trigger),
        }
    }
}

/// Passed to the discovery task to coordinate shutdown.
///
/// Resolves once shutdown has begun, yielding the completion token. The
/// token reports the task as done when it is dropped, which bounds how
/// long a caller has to wait after signalling cancellation.
#[derive(Clone)]
pub struct ShutdownSignal {
    /// Resolved when shutdown has begun. Disarmed after completion so a
    /// later poll does not yield twice.
    begin: Option<Tripwire>,

    completed: Option<ShutdownSignalToken>,
}

impl Future for ShutdownSignal {
    type Output = ShutdownSignalToken;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        match this.begin.as_mut() {
            Some(tripwire) => {
                ready!(Pin::new(tripwire).poll(cx));

                this.begin = None;
                Poll::Ready(this.completed.take().expect("polled after completion"))
            }
            None => Poll::Pending,
        }
    }
}

impl ShutdownSignal {
    pub fn new(tripwire: Tripwire, trigger: Trigger) -> Self {
        Self {
            begin: Some(tripwire),
            completed: Some(ShutdownSignalToken::new(trigger)),
        }
    }
}

#[cfg(any(test, feature = "test-util"))]
impl ShutdownSignal {
    /// A signal that never fires. The completion trigger is owned by the
    /// signal itself, so nothing resolves until it is dropped.
    pub fn noop() -> Self {
        let (trigger, tripwire) = Tripwire::new();

        Self {
            begin: Some(tripwire),
            completed: Some(ShutdownSignalToken::new(trigger)),
        }
    }

    /// A signal wired for tests. Cancelling the returned trigger begins
    /// shutdown; the returned tripwire resolves once the task holding the
    /// signal has actually returned.
    pub fn new_wired() -> (Trigger, ShutdownSignal, Tripwire) {
        let (trigger_shutdown, tripwire) = Tripwire::new();
        let (trigger, shutdown_done) = Tripwire::new();
        let shutdown = ShutdownSignal::new(tripwire, trigger);

        (trigger_shutdown, shutdown, shutdown_done)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn completion_observed_after_cancel() {
        let (trigger, shutdown, done) = ShutdownSignal::new_wired();

        let task = tokio::spawn(async move {
            let _token = shutdown.await;
            // simulated wind down before the token drops
            tokio::time::sleep(Duration::from_millis(10)).await;
        });

        trigger.cancel();

        tokio::time::timeout(Duration::from_secs(2), done)
            .await
            .expect("task completes after cancellation");
        task.await.unwrap();
    }

    #[tokio::test]
    async fn dropping_signal_reports_completion() {
        let (_trigger, shutdown, done) = ShutdownSignal::new_wired();

        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(2), done)
            .await
            .expect("dropping the signal resolves completion");
    }
}
