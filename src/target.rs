use std::collections::BTreeMap;

use crate::instance::ServiceInstance;

/// The scrape address label every target record carries.
pub const ADDRESS: &str = "__address__";

const CLUSTER: &str = "__meta_ecs_cluster";
const SERVICE: &str = "__meta_ecs_service";
const IMAGE: &str = "__meta_ecs_image";
const CONTAINER: &str = "__meta_ecs_container";
const CONTAINER_PORT_NUMBER: &str = "__meta_ecs_container_port_number";
const CONTAINER_PORT_PROTOCOL: &str = "__meta_ecs_container_port_protocol";

const CONTAINER_LABEL_PREFIX: &str = "__meta_ecs_container_label_";
const NODE_TAG_PREFIX: &str = "__meta_ecs_node_tag_";

/// A snapshot of targets produced by one polling cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetGroup {
    /// One label set per instance, in retrieval order. Each target is
    /// uniquely identified in the group by its `__address__` label.
    pub targets: Vec<BTreeMap<String, String>>,

    /// Labels shared by every target of the group.
    pub labels: BTreeMap<String, String>,

    /// Identifier of the discoverer that produced the group.
    pub source: Option<String>,
}

/// Derive the flat label record of a single instance.
///
/// Values pass through unmodified. Container labels are inserted before
/// node tags; the two prefixes are disjoint namespaces, so a tag can
/// never shadow a label.
pub fn instance_labels(instance: &ServiceInstance) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();

    labels.insert(ADDRESS.to_string(), instance.addr.clone());
    labels.insert(CLUSTER.to_string(), instance.cluster.clone());
    labels.insert(SERVICE.to_string(), instance.service.clone());
    labels.insert(IMAGE.to_string(), instance.image.clone());
    labels.insert(CONTAINER.to_string(), instance.container.clone());
    labels.insert(
        CONTAINER_PORT_NUMBER.to_string(),
        instance.container_port.clone(),
    );
    labels.insert(
        CONTAINER_PORT_PROTOCOL.to_string(),
        instance.container_port_proto.clone(),
    );

    for (key, value) in &instance.labels {
        labels.insert(format!("{CONTAINER_LABEL_PREFIX}{key}"), value.clone());
    }

    for (key, value) in &instance.tags {
        labels.insert(format!("{NODE_TAG_PREFIX}{key}"), value.clone());
    }

    labels
}
