#![allow(dead_code)]
use async_trait::async_trait;
use axum::Router;
use ferrous_probe_api::{create_api_routes, AppState};
use ferrous_probe_application::ports::DnsClientPort;
use ferrous_probe_application::use_cases::CheckPropagationUseCase;
use ferrous_probe_domain::{DomainError, RawAnswer, RecordType, ResolverEndpoint};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

/// Answers per upstream IP; unknown upstreams fail with a transport error.
#[derive(Default)]
pub struct StaticDnsClient {
    answers: HashMap<IpAddr, Result<Vec<RawAnswer>, DomainError>>,
}

impl StaticDnsClient {
    pub fn answer(mut self, upstream: &str, answers: Vec<RawAnswer>) -> Self {
        self.answers.insert(upstream.parse().unwrap(), Ok(answers));
        self
    }

    pub fn fail(mut self, upstream: &str, error: DomainError) -> Self {
        self.answers.insert(upstream.parse().unwrap(), Err(error));
        self
    }
}

#[async_trait]
impl DnsClientPort for StaticDnsClient {
    async fn query(
        &self,
        upstream: IpAddr,
        _domain: &str,
        _record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.answers
            .get(&upstream)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::Transport("unreachable".to_string())))
    }
}

pub fn test_resolvers() -> Vec<ResolverEndpoint> {
    vec![
        ResolverEndpoint::new(
            "Mountain View, CA, USA",
            "8.8.8.8".parse().unwrap(),
            37.386,
            -122.0838,
            "Google",
            "US",
        ),
        ResolverEndpoint::new(
            "Frankfurt, Germany",
            "84.200.69.80".parse().unwrap(),
            50.1109,
            8.6821,
            "DNS.WATCH",
            "DE",
        ),
    ]
}

pub fn create_test_app(client: StaticDnsClient) -> Router {
    let use_case = CheckPropagationUseCase::new(Arc::new(client), test_resolvers().into());
    create_api_routes(AppState {
        check_propagation: Arc::new(use_case),
    })
}
