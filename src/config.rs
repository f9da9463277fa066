//! Resolver and output tunables.

use std::time::Duration;

use url::Url;

/// Public Nominatim search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Default minimum delay between geocoding requests, in seconds. The
/// public Nominatim instance requires at most one request per second.
pub const DEFAULT_REQUEST_DELAY_SECS: f64 = 1.0;

/// Default map destination.
pub const DEFAULT_DESTINATION: &str = "Map.html";

/// How many nearest filming sites the map shows by default.
pub const DEFAULT_SITE_COUNT: usize = 10;

/// Settings for the geocoding resolver.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Search endpoint of the geocoding service.
    pub endpoint: Url,
    /// Identifying User-Agent; the public Nominatim instance rejects
    /// anonymous clients.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Minimum delay between requests.
    pub min_interval: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            user_agent: format!("movienear/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(10),
            min_interval: Duration::from_secs_f64(DEFAULT_REQUEST_DELAY_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_nominatim() {
        let config = GeocoderConfig::default();
        assert_eq!(config.endpoint.host_str(), Some("nominatim.openstreetmap.org"));
        assert_eq!(config.min_interval, Duration::from_secs(1));
        assert!(config.user_agent.starts_with("movienear/"));
    }
}
