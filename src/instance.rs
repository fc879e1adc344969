use std::collections::BTreeMap;

/// One running container endpoint reported by the backend inventory.
///
/// Instances are created fresh by the retriever on every poll and owned
/// by the cycle that retrieved them, nothing is kept across cycles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceInstance {
    /// Name of the cluster the instance is placed on.
    pub cluster: String,

    /// Name of the service the instance belongs to.
    pub service: String,

    /// Scrape address of the endpoint, in `host:port` form. It is the
    /// unique routing key of the instance inside a batch.
    pub addr: String,

    /// Name of the container backing the endpoint.
    pub container: String,

    /// Exposed container port, kept in string form.
    pub container_port: String,

    /// Protocol of the container port, `tcp` or `udp`.
    pub container_port_proto: String,

    /// Image reference the container was started from.
    pub image: String,

    /// Container level labels, may be empty.
    pub labels: BTreeMap<String, String>,

    /// Node level tags, may be empty.
    pub tags: BTreeMap<String, String>,
}
