use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::Retriever;
use crate::discovery::EcsDiscovery;

pub const fn default_interval() -> Duration {
    Duration::from_secs(15)
}

/// Configuration of one discovery. The retriever itself is injected by
/// the embedding application, it is not part of the config surface.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Selects which instances to enumerate, e.g. a region or an account
    /// scope.
    pub source: String,

    /// The interval between two retrievals.
    #[serde(with = "humanize::duration::serde", default = "default_interval")]
    pub interval: Duration,
}

impl Config {
    pub fn build(&self, client: Arc<dyn Retriever>) -> EcsDiscovery {
        EcsDiscovery::new(self.source.clone(), self.interval, client)
    }
}
