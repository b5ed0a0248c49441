//! Ferrous Probe Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_request;
pub mod resolver_endpoint;
pub mod resolver_result;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{NormalizedAnswer, RawAnswer, RecordType};
pub use errors::DomainError;
pub use query_request::QueryRequest;
pub use resolver_endpoint::ResolverEndpoint;
pub use resolver_result::{AggregateResponse, ResolverOutcome, ResolverResult, ResolverStatus};
