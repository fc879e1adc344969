pub mod client;
mod config;
mod discovery;
mod instance;
mod pipeline;
mod shutdown;
mod target;
#[cfg(test)]
mod testing;

pub use config::{Config, default_interval};
pub use discovery::EcsDiscovery;
pub use instance::ServiceInstance;
pub use pipeline::{ClosedError, Pipeline};
pub use shutdown::{ShutdownSignal, ShutdownSignalToken};
pub use target::{ADDRESS, TargetGroup, instance_labels};

#[macro_use]
extern crate tracing;

/// Basic error type, dynamically dispatched and safe to send across threads
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Basic result type, defined in terms of [`Error`] and generic over `T`
pub type Result<T> = std::result::Result<T, Error>;
