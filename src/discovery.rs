use std::sync::Arc;
use std::time::Duration;

use crate::client::Retriever;
use crate::instance::ServiceInstance;
use crate::pipeline::Pipeline;
use crate::shutdown::ShutdownSignal;
use crate::target::{TargetGroup, instance_labels};

/// Polls the retriever on a fixed interval and publishes one target group
/// per cycle. Each group is an independent snapshot; merging or diffing
/// across cycles is the consumer's business.
pub struct EcsDiscovery {
    source: String,
    interval: Duration,
    client: Arc<dyn Retriever>,
}

impl EcsDiscovery {
    pub fn new(source: impl Into<String>, interval: Duration, client: Arc<dyn Retriever>) -> Self {
        Self {
            source: source.into(),
            interval,
            client,
        }
    }

    /// Run the polling loop until `shutdown` fires or the consumer goes
    /// away. Errors of a single cycle are logged and never escape.
    pub async fn run(self, mut shutdown: ShutdownSignal, mut output: Pipeline) -> Result<(), ()> {
        // The first tick completes immediately, so the first poll happens
        // right on entry.
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            let instances = tokio::select! {
                biased;

                _ = &mut shutdown => break,
                result = self.client.list(&self.source) => match result {
                    Ok(instances) => instances,
                    Err(err) => {
                        warn!(
                            message = "list service instances failed",
                            source = %self.source,
                            %err
                        );
                        continue;
                    }
                }
            };

            let group = self.build_group(instances);

            tokio::select! {
                biased;

                _ = &mut shutdown => break,
                result = output.send(group) => if result.is_err() {
                    // the consumer is gone, nothing can be delivered anymore
                    break;
                }
            }
        }

        Ok(())
    }

    fn build_group(&self, instances: Vec<ServiceInstance>) -> TargetGroup {
        let mut targets = Vec::with_capacity(instances.len());

        for instance in instances {
            if instance.addr.is_empty() {
                warn!(
                    message = "dropping instance without address",
                    cluster = %instance.cluster,
                    service = %instance.service
                );
                continue;
            }

            targets.push(instance_labels(&instance));
        }

        TargetGroup {
            targets,
            labels: Default::default(),
            source: Some(self.source.clone()),
        }
    }
}
