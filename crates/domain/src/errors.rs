use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain is required")]
    MissingDomain,

    #[error("Invalid record type. Supported types: {supported}", supported = RecordType::supported_list())]
    UnsupportedType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream {server} answered {rcode}")]
    UpstreamFailure { server: String, rcode: &'static str },

    #[error("No records found")]
    NoRecordsFound,

    #[error("Lookup task failed: {0}")]
    LookupTaskFailed(String),
}

impl DomainError {
    /// Errors caused by the caller's input rather than by an upstream resolver.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingDomain | DomainError::UnsupportedType(_)
        )
    }
}
