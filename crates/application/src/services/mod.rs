mod record_normalizer;
mod resolver_client;

pub use record_normalizer::{NormalizationStrategy, RecordNormalizer};
pub use resolver_client::ResolverClient;
