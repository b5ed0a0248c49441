use crate::ports::DnsClientPort;
use crate::services::{RecordNormalizer, ResolverClient};
use ferrous_probe_domain::{
    AggregateResponse, DomainError, NormalizedAnswer, QueryRequest, RecordType, ResolverEndpoint,
    ResolverResult,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Asks every configured vantage point the same question and collects all answers.
///
/// Waits for the slowest resolver: the response is only built once every
/// lookup has either answered or failed. Results come back in configured
/// resolver order whatever order the lookups finish in.
pub struct CheckPropagationUseCase {
    client: Arc<dyn DnsClientPort>,
    resolvers: Arc<[ResolverEndpoint]>,
}

impl CheckPropagationUseCase {
    pub fn new(client: Arc<dyn DnsClientPort>, resolvers: Arc<[ResolverEndpoint]>) -> Self {
        Self { client, resolvers }
    }

    pub fn resolvers(&self) -> &[ResolverEndpoint] {
        &self.resolvers
    }

    pub async fn execute(&self, request: &QueryRequest) -> AggregateResponse {
        let start = Instant::now();
        let record_type = request.record_type;

        let handles: Vec<_> = self
            .resolvers
            .iter()
            .map(|endpoint| {
                let resolver = ResolverClient::new(Arc::clone(&self.client), endpoint.ip);
                let domain = Arc::clone(&request.domain);
                tokio::spawn(async move { probe(resolver, &domain, record_type).await })
            })
            .collect();

        let outcomes = join_all(handles).await;

        let results: Vec<ResolverResult> = self
            .resolvers
            .iter()
            .zip(outcomes)
            .map(|(endpoint, joined)| {
                let outcome = joined.unwrap_or_else(|e| {
                    warn!(upstream = %endpoint.ip, error = %e, "Lookup task did not complete");
                    Err(DomainError::LookupTaskFailed(e.to_string()))
                });
                ResolverResult::from_result(endpoint.clone(), outcome)
            })
            .collect();

        let response = AggregateResponse {
            domain: Arc::clone(&request.domain),
            record_type,
            results,
        };

        info!(
            domain = %response.domain,
            record_type = %record_type,
            resolvers = response.results.len(),
            ok = response.ok_count(),
            errors = response.error_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Propagation check complete"
        );

        response
    }
}

async fn probe(
    resolver: ResolverClient,
    domain: &str,
    record_type: RecordType,
) -> Result<Vec<NormalizedAnswer>, DomainError> {
    let start = Instant::now();
    let result = resolver.resolve(domain, record_type).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(answers) if answers.is_empty() => {
            debug!(upstream = %resolver.upstream(), latency_ms, "Empty answer set");
            Err(DomainError::NoRecordsFound)
        }
        Ok(answers) => {
            debug!(
                upstream = %resolver.upstream(),
                answers = answers.len(),
                latency_ms,
                "Lookup succeeded"
            );
            Ok(RecordNormalizer::normalize(record_type, &answers))
        }
        Err(e) => {
            debug!(upstream = %resolver.upstream(), error = %e, latency_ms, "Lookup failed");
            Err(e)
        }
    }
}
