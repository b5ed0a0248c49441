use async_trait::async_trait;
use ferrous_probe_domain::{DomainError, RawAnswer, RecordType};
use std::net::IpAddr;

/// How a client prefers to resolve a given record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMethod {
    /// Plain query by type; every record in the answer section is returned.
    Generic,
    /// Client-specific shortcut for this type.
    TypeSpecific,
}

/// DNS client capability able to query an arbitrary upstream resolver.
#[async_trait]
pub trait DnsClientPort: Send + Sync {
    async fn query(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError>;

    /// Type-specific shortcut. Only called when [`lookup_method`] advertises
    /// [`LookupMethod::TypeSpecific`] for `record_type`.
    ///
    /// [`lookup_method`]: DnsClientPort::lookup_method
    async fn resolve_typed(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.query(upstream, domain, record_type).await
    }

    /// Capability table of this client. Defaults to no shortcuts.
    fn lookup_method(&self, _record_type: RecordType) -> LookupMethod {
        LookupMethod::Generic
    }
}
