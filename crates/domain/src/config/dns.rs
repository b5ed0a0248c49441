use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Per-lookup timeout in seconds. There is no timeout across the whole fan-out.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,

    /// Re-send over TCP when a UDP answer comes back truncated.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl DnsConfig {
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            upstream_port: default_upstream_port(),
            tcp_fallback: default_true(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5
}

fn default_upstream_port() -> u16 {
    53
}

fn default_true() -> bool {
    true
}
