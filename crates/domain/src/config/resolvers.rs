use crate::ResolverEndpoint;
use std::net::{IpAddr, Ipv4Addr};

/// Well-known public resolvers used when the config file lists none.
pub fn default_resolvers() -> Vec<ResolverEndpoint> {
    vec![
        endpoint("Mountain View, CA, USA", [8, 8, 8, 8], 37.3861, -122.0839, "Google", "US"),
        endpoint("San Francisco, CA, USA", [1, 1, 1, 1], 37.7749, -122.4194, "Cloudflare", "US"),
        endpoint("Berkeley, CA, USA", [9, 9, 9, 9], 37.8715, -122.2730, "Quad9", "US"),
        endpoint("San Jose, CA, USA", [208, 67, 222, 222], 37.3382, -121.8863, "OpenDNS", "US"),
        endpoint("Toronto, Canada", [76, 76, 2, 0], 43.6532, -79.3832, "Control D", "CA"),
        endpoint("Frankfurt, Germany", [84, 200, 69, 80], 50.1109, 8.6821, "DNS.WATCH", "DE"),
        endpoint("Stockholm, Sweden", [194, 242, 2, 2], 59.3293, 18.0686, "Mullvad", "SE"),
        endpoint("Limassol, Cyprus", [94, 140, 14, 14], 34.7071, 33.0226, "AdGuard", "CY"),
        endpoint("Moscow, Russia", [77, 88, 8, 8], 55.7558, 37.6173, "Yandex", "RU"),
        endpoint("Hangzhou, China", [223, 5, 5, 5], 30.2741, 120.1551, "AliDNS", "CN"),
        endpoint("Shenzhen, China", [119, 29, 29, 29], 22.5431, 114.0579, "DNSPod", "CN"),
    ]
}

fn endpoint(
    location: &str,
    ip: [u8; 4],
    lat: f64,
    lon: f64,
    provider: &str,
    country_code: &str,
) -> ResolverEndpoint {
    ResolverEndpoint::new(
        location,
        IpAddr::V4(Ipv4Addr::from(ip)),
        lat,
        lon,
        provider,
        country_code,
    )
}
