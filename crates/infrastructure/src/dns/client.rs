use crate::dns::forwarding::{
    AnswerEncoder, DnsResponse, FieldStyle, MessageBuilder, RecordTypeMapper, ResponseParser,
};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use ferrous_probe_application::ports::{DnsClientPort, LookupMethod};
use ferrous_probe_domain::config::DnsConfig;
use ferrous_probe_domain::{DomainError, RawAnswer, RecordType};
use hickory_proto::rr::Record;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

/// Stateless DNS client speaking the wire protocol to any upstream resolver.
///
/// Each lookup builds its own query and binds its own socket, so one instance
/// is shared by every concurrent lookup.
#[derive(Debug, Clone)]
pub struct HickoryDnsClient {
    port: u16,
    timeout: Duration,
    tcp_fallback: bool,
}

impl HickoryDnsClient {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            tcp_fallback: true,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Self {
        Self::new(config.upstream_port, config.query_timeout_duration())
            .with_tcp_fallback(config.tcp_fallback)
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// One question, one answer: UDP first, TCP only when the UDP answer is
    /// truncated. Fails on upstream error codes.
    async fn exchange(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, DomainError> {
        let start = Instant::now();
        let server_addr = SocketAddr::new(upstream, self.port);
        let (query_id, query_bytes) = MessageBuilder::build_query(domain, record_type)?;

        let udp = Transport::udp(server_addr);
        let udp_response = udp.send(&query_bytes, self.timeout).await?;
        let mut protocol = udp_response.protocol_used;
        let mut response = Self::parse_matching(&udp_response.bytes, query_id, server_addr)?;

        if response.truncated && self.tcp_fallback {
            debug!(
                server = %server_addr,
                protocol = udp.protocol_name(),
                "Response truncated (TC bit), retrying via TCP"
            );

            let remaining = self.timeout.saturating_sub(start.elapsed());
            if remaining.is_zero() {
                return Err(DomainError::TransportTimeout {
                    server: server_addr.to_string(),
                });
            }

            let tcp = Transport::tcp(server_addr);
            let tcp_response = tcp.send(&query_bytes, remaining).await?;
            protocol = tcp_response.protocol_used;
            response = Self::parse_matching(&tcp_response.bytes, query_id, server_addr)?;
        }

        if !response.has_answer_section() {
            return Err(DomainError::UpstreamFailure {
                server: server_addr.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode),
            });
        }

        debug!(
            server = %server_addr,
            domain = %domain,
            record_type = %record_type,
            protocol,
            answers = response.answers.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Upstream answered"
        );

        Ok(response.answers)
    }

    fn parse_matching(
        bytes: &[u8],
        query_id: u16,
        server_addr: SocketAddr,
    ) -> Result<DnsResponse, DomainError> {
        let response = ResponseParser::parse(bytes)?;
        if response.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "ID mismatch from {}: expected {}, got {}",
                server_addr, query_id, response.id
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl DnsClientPort for HickoryDnsClient {
    async fn query(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        let records = self.exchange(upstream, domain, record_type).await?;
        Ok(AnswerEncoder::encode_all(&records, FieldStyle::Generic))
    }

    async fn resolve_typed(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        let wanted = RecordTypeMapper::to_hickory(record_type);
        let records = self.exchange(upstream, domain, record_type).await?;

        Ok(records
            .iter()
            .filter(|r| r.record_type() == wanted)
            .map(|r| AnswerEncoder::encode(r, FieldStyle::Typed))
            .collect())
    }

    fn lookup_method(&self, record_type: RecordType) -> LookupMethod {
        match record_type {
            RecordType::A
            | RecordType::AAAA
            | RecordType::CNAME
            | RecordType::MX
            | RecordType::NS
            | RecordType::PTR
            | RecordType::SRV
            | RecordType::TXT => LookupMethod::TypeSpecific,
            RecordType::SOA | RecordType::CAA => LookupMethod::Generic,
        }
    }
}
