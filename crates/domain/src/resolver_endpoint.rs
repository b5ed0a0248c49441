use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A public resolver used as a vantage point, with the metadata shown on the map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResolverEndpoint {
    pub location: String,

    pub ip: IpAddr,

    pub lat: f64,

    pub lon: f64,

    pub provider: String,

    #[serde(alias = "countryCode")]
    pub country_code: String,
}

impl ResolverEndpoint {
    pub fn new(
        location: impl Into<String>,
        ip: IpAddr,
        lat: f64,
        lon: f64,
        provider: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            ip,
            lat,
            lon,
            provider: provider.into(),
            country_code: country_code.into(),
        }
    }
}
