use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::Retriever;
use crate::instance::ServiceInstance;

/// Serves a fixed snapshot from memory, with a switch to make calls fail
/// for exercising skipped cycles. Interchangeable with a live retriever.
#[derive(Debug, Default)]
pub struct MockRetriever {
    instances: Vec<ServiceInstance>,
    failing: AtomicBool,
}

impl MockRetriever {
    pub fn new(instances: Vec<ServiceInstance>) -> Self {
        Self {
            instances,
            failing: AtomicBool::new(false),
        }
    }

    /// Make subsequent calls fail until `recover` is called.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Retriever for MockRetriever {
    async fn list(&self, _source: &str) -> crate::Result<Vec<ServiceInstance>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("backend unreachable".into());
        }

        Ok(self.instances.clone())
    }
}
