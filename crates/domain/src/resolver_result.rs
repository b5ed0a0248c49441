use crate::{DomainError, NormalizedAnswer, RecordType, ResolverEndpoint};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverStatus {
    Ok,
    Error,
}

impl ResolverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolverOutcome {
    Ok(Vec<NormalizedAnswer>),
    Error(String),
}

/// What one vantage point answered for one check.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverResult {
    pub endpoint: ResolverEndpoint,
    pub outcome: ResolverOutcome,
}

impl ResolverResult {
    pub fn ok(endpoint: ResolverEndpoint, answers: Vec<NormalizedAnswer>) -> Self {
        Self {
            endpoint,
            outcome: ResolverOutcome::Ok(answers),
        }
    }

    pub fn error(endpoint: ResolverEndpoint, message: impl Into<String>) -> Self {
        Self {
            endpoint,
            outcome: ResolverOutcome::Error(message.into()),
        }
    }

    pub fn from_result(
        endpoint: ResolverEndpoint,
        result: Result<Vec<NormalizedAnswer>, DomainError>,
    ) -> Self {
        match result {
            Ok(answers) => Self::ok(endpoint, answers),
            Err(e) => Self::error(endpoint, e.to_string()),
        }
    }

    pub fn status(&self) -> ResolverStatus {
        match self.outcome {
            ResolverOutcome::Ok(_) => ResolverStatus::Ok,
            ResolverOutcome::Error(_) => ResolverStatus::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status() == ResolverStatus::Ok
    }

    pub fn answers(&self) -> Option<&[NormalizedAnswer]> {
        match &self.outcome {
            ResolverOutcome::Ok(answers) => Some(answers),
            ResolverOutcome::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            ResolverOutcome::Ok(_) => None,
            ResolverOutcome::Error(message) => Some(message),
        }
    }
}

/// Combined result of one check, `results` in configured resolver order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResponse {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub results: Vec<ResolverResult>,
}

impl AggregateResponse {
    pub fn ok_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.len() - self.ok_count()
    }
}
