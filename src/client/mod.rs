#[cfg(any(test, feature = "test-util"))]
mod mock;

#[cfg(any(test, feature = "test-util"))]
pub use mock::MockRetriever;

use async_trait::async_trait;

use crate::instance::ServiceInstance;

/// Lists the currently running service instances of a source.
///
/// Implementations talk to a backend inventory and may block on network
/// round-trips; timeout policy is theirs, not the caller's. The returned
/// instances are an authoritative, complete snapshot of the source at call
/// time, callers never merge it with prior state.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn list(&self, source: &str) -> crate::Result<Vec<ServiceInstance>>;
}
