//! Nominatim (OpenStreetMap) provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{GeocodeError, GeocodeProvider};
use crate::config::GeocoderConfig;
use crate::geo::Position;

/// One hit from the Nominatim search endpoint. Coordinates arrive as
/// strings and are parsed on our side.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Geocoding over the Nominatim HTTP search API.
pub struct NominatimProvider {
    client: Client,
    endpoint: Url,
}

impl NominatimProvider {
    pub fn new(config: &GeocoderConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

#[async_trait]
impl GeocodeProvider for NominatimProvider {
    async fn lookup(&self, query: &str) -> Result<Option<Position>, GeocodeError> {
        let url = self.search_url(query);
        debug!(query, "geocoding lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }

        let hits: Vec<SearchHit> = response
            .json()
            .await
            .map_err(|err| GeocodeError::InvalidBody(err.to_string()))?;

        let Some(hit) = hits.first() else {
            return Ok(None);
        };

        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidBody(format!("latitude {:?}", hit.lat)))?;
        let longitude: f64 = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidBody(format!("longitude {:?}", hit.lon)))?;

        Ok(Some(Position::new(latitude, longitude)))
    }
}
