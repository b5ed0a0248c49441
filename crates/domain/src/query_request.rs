use crate::{DomainError, RecordType};
use std::sync::Arc;

/// A validated propagation check: one domain, one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl QueryRequest {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Validate raw request parameters.
    ///
    /// The domain is checked first, so a missing domain is reported even when
    /// the type is also invalid. An absent type defaults to `A`; a present one
    /// is matched case-insensitively against [`RecordType::SUPPORTED`].
    pub fn from_params(
        domain: Option<&str>,
        record_type: Option<&str>,
    ) -> Result<Self, DomainError> {
        let domain = domain
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(DomainError::MissingDomain)?;

        let record_type = match record_type {
            None => RecordType::A,
            Some(raw) => raw
                .parse::<RecordType>()
                .map_err(|_| DomainError::UnsupportedType(raw.to_string()))?,
        };

        Ok(Self::new(domain, record_type))
    }
}
