use super::resolver::ResolverResultDto;
use ferrous_probe_domain::AggregateResponse;
use serde::{Deserialize, Serialize};

/// Raw query string of `GET /check`; validated into a `QueryRequest`.
#[derive(Deserialize, Debug, Default)]
pub struct CheckQuery {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CheckResponse {
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub results: Vec<ResolverResultDto>,
}

impl From<AggregateResponse> for CheckResponse {
    fn from(response: AggregateResponse) -> Self {
        Self {
            domain: response.domain.to_string(),
            record_type: response.record_type.as_str(),
            results: response
                .results
                .into_iter()
                .map(ResolverResultDto::from)
                .collect(),
        }
    }
}
