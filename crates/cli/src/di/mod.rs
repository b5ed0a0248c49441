use ferrous_probe_application::use_cases::CheckPropagationUseCase;
use ferrous_probe_domain::{Config, ResolverEndpoint};
use ferrous_probe_infrastructure::dns::HickoryDnsClient;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub check_propagation: Arc<CheckPropagationUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(HickoryDnsClient::from_config(&config.dns));
        let resolvers: Arc<[ResolverEndpoint]> = config.resolvers.clone().into();

        info!(
            resolvers = resolvers.len(),
            timeout_secs = config.dns.query_timeout,
            upstream_port = config.dns.upstream_port,
            tcp_fallback = config.dns.tcp_fallback,
            "DNS client ready"
        );

        Self {
            check_propagation: Arc::new(CheckPropagationUseCase::new(client, resolvers)),
        }
    }
}
