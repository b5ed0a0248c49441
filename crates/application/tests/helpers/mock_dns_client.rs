use async_trait::async_trait;
use ferrous_probe_application::ports::{DnsClientPort, LookupMethod};
use ferrous_probe_domain::{DomainError, RawAnswer, RecordType, ResolverEndpoint};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
pub enum MockBehavior {
    Answers(Vec<RawAnswer>),
    Fail(DomainError),
    Delayed(Duration, Box<MockBehavior>),
    Panic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub upstream: IpAddr,
    pub method: LookupMethod,
    pub domain: String,
    pub record_type: RecordType,
}

/// Scripted DNS client: behavior is chosen per upstream IP.
pub struct MockDnsClient {
    behaviors: HashMap<IpAddr, MockBehavior>,
    typed: HashSet<RecordType>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            typed: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_behavior(mut self, upstream: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(upstream.parse().unwrap(), behavior);
        self
    }

    pub fn with_answers(self, upstream: &str, answers: Vec<RawAnswer>) -> Self {
        self.with_behavior(upstream, MockBehavior::Answers(answers))
    }

    pub fn with_failure(self, upstream: &str, error: DomainError) -> Self {
        self.with_behavior(upstream, MockBehavior::Fail(error))
    }

    pub fn with_delay(self, upstream: &str, delay: Duration, answers: Vec<RawAnswer>) -> Self {
        self.with_behavior(
            upstream,
            MockBehavior::Delayed(delay, Box::new(MockBehavior::Answers(answers))),
        )
    }

    /// Advertise a type-specific shortcut for these record types.
    pub fn with_typed(mut self, types: &[RecordType]) -> Self {
        self.typed.extend(types.iter().copied());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn run(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
        method: LookupMethod,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            upstream,
            method,
            domain: domain.to_string(),
            record_type,
        });

        let behavior = self
            .behaviors
            .get(&upstream)
            .cloned()
            .unwrap_or(MockBehavior::Answers(vec![]));
        play(behavior).await
    }
}

impl Default for MockDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn play(mut behavior: MockBehavior) -> Result<Vec<RawAnswer>, DomainError> {
    loop {
        match behavior {
            MockBehavior::Answers(answers) => return Ok(answers),
            MockBehavior::Fail(error) => return Err(error),
            MockBehavior::Delayed(delay, next) => {
                tokio::time::sleep(delay).await;
                behavior = *next;
            }
            MockBehavior::Panic => panic!("mock resolver exploded"),
        }
    }
}

#[async_trait]
impl DnsClientPort for MockDnsClient {
    async fn query(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.run(upstream, domain, record_type, LookupMethod::Generic)
            .await
    }

    async fn resolve_typed(
        &self,
        upstream: IpAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.run(upstream, domain, record_type, LookupMethod::TypeSpecific)
            .await
    }

    fn lookup_method(&self, record_type: RecordType) -> LookupMethod {
        if self.typed.contains(&record_type) {
            LookupMethod::TypeSpecific
        } else {
            LookupMethod::Generic
        }
    }
}

pub fn endpoint(location: &str, ip: &str, provider: &str, country_code: &str) -> ResolverEndpoint {
    ResolverEndpoint::new(location, ip.parse().unwrap(), 10.5, -20.25, provider, country_code)
}
