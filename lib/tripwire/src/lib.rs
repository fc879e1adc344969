use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

struct Inner {
    fired: AtomicBool,

    // Every Tripwire clone gets its own slot, so firing wakes each of
    // them exactly once.
    next_id: AtomicU64,
    wakers: Mutex<HashMap<u64, Waker>>,
}

impl Inner {
    fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn fire(&self) {
        if self.fired.swap(true, Ordering::SeqCst) {
            return;
        }

        self.wakers
            .lock()
            .expect("lock waker map")
            .drain()
            .for_each(|(_id, waker)| waker.wake());
    }
}

/// The firing half of a tripwire. Cancelling or dropping it resolves
/// every associated [`Tripwire`] immediately.
pub struct Trigger {
    inner: Arc<Inner>,
}

impl Trigger {
    /// Fire the tripwire, all associated [`Tripwire`]s resolve at once.
    pub fn cancel(self) {
        self.inner.fire();
    }
}

impl Drop for Trigger {
    fn drop(&mut self) {
        self.inner.fire();
    }
}

/// A future that resolves once its [`Trigger`] is cancelled or dropped.
/// Clones are independent, each resolves on its own.
pub struct Tripwire {
    inner: Arc<Inner>,
    id: u64,
}

impl Tripwire {
    pub fn new() -> (Trigger, Tripwire) {
        let inner = Arc::new(Inner {
            fired: AtomicBool::new(false),
            next_id: AtomicU64::new(0),
            wakers: Mutex::new(HashMap::new()),
        });

        (
            Trigger {
                inner: Arc::clone(&inner),
            },
            Tripwire {
                id: inner.next_id(),
                inner,
            },
        )
    }
}

impl Clone for Tripwire {
    fn clone(&self) -> Self {
        let inner = Arc::clone(&self.inner);
        let id = inner.next_id();

        Self { inner, id }
    }
}

impl Drop for Tripwire {
    fn drop(&mut self) {
        self.inner
            .wakers
            .lock()
            .expect("lock waker map")
            .remove(&self.id);
    }
}

impl Future for Tripwire {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.inner.fired() {
            return Poll::Ready(());
        }

        self.inner
            .wakers
            .lock()
            .expect("lock waker map")
            .insert(self.id, cx.waker().clone());

        // The trigger might have fired between the first check and the
        // waker registration, in which case this waker was never drained.
        if self.inner.fired() {
            self.inner
                .wakers
                .lock()
                .expect("lock waker map")
                .remove(&self.id);

            return Poll::Ready(());
        }

        Poll::Pending
    }
}
