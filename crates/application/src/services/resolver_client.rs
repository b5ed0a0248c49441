use crate::ports::{DnsClientPort, LookupMethod};
use ferrous_probe_domain::{DomainError, RawAnswer, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// A DNS client bound to one upstream resolver.
///
/// Performs exactly one lookup per call. Retries are not done here.
#[derive(Clone)]
pub struct ResolverClient {
    client: Arc<dyn DnsClientPort>,
    upstream: IpAddr,
}

impl ResolverClient {
    pub fn new(client: Arc<dyn DnsClientPort>, upstream: IpAddr) -> Self {
        Self { client, upstream }
    }

    pub fn upstream(&self) -> IpAddr {
        self.upstream
    }

    /// SOA always goes through the generic query; everything else follows
    /// the client's capability table.
    pub fn method_for(&self, record_type: RecordType) -> LookupMethod {
        if record_type == RecordType::SOA {
            return LookupMethod::Generic;
        }
        self.client.lookup_method(record_type)
    }

    pub async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        let method = self.method_for(record_type);

        debug!(
            upstream = %self.upstream,
            domain = %domain,
            record_type = %record_type,
            method = ?method,
            "Resolving"
        );

        match method {
            LookupMethod::Generic => self.client.query(self.upstream, domain, record_type).await,
            LookupMethod::TypeSpecific => {
                self.client
                    .resolve_typed(self.upstream, domain, record_type)
                    .await
            }
        }
    }
}
