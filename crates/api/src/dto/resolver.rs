use ferrous_probe_domain::{NormalizedAnswer, ResolverEndpoint, ResolverOutcome, ResolverResult};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ResolverDto {
    pub location: String,
    pub ip: String,
    pub lat: f64,
    pub lon: f64,
    pub provider: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

impl From<&ResolverEndpoint> for ResolverDto {
    fn from(endpoint: &ResolverEndpoint) -> Self {
        Self {
            location: endpoint.location.clone(),
            ip: endpoint.ip.to_string(),
            lat: endpoint.lat,
            lon: endpoint.lon,
            provider: endpoint.provider.clone(),
            country_code: endpoint.country_code.clone(),
        }
    }
}

/// One entry of `results`: `answers` on success, `error` on failure, never both.
#[derive(Serialize, Debug, Clone)]
pub struct ResolverResultDto {
    pub location: String,
    pub ip: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<NormalizedAnswer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub provider: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

impl From<ResolverResult> for ResolverResultDto {
    fn from(result: ResolverResult) -> Self {
        let status = result.status().as_str();
        let endpoint = result.endpoint;
        let (answers, error) = match result.outcome {
            ResolverOutcome::Ok(answers) => (Some(answers), None),
            ResolverOutcome::Error(message) => (None, Some(message)),
        };

        Self {
            location: endpoint.location,
            ip: endpoint.ip.to_string(),
            status,
            answers,
            error,
            lat: endpoint.lat,
            lon: endpoint.lon,
            provider: endpoint.provider,
            country_code: endpoint.country_code,
        }
    }
}
