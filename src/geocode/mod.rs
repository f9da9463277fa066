//! Location resolution through an external geocoding service.
//!
//! The [`Geocoder`] is constructed explicitly for a pipeline run and
//! holds the provider handle together with the request gate; there is no
//! process-level singleton. Lookup failures never propagate past
//! [`Geocoder::resolve`]: a location that cannot be resolved degrades to
//! [`Resolution::Unresolved`] and the rest of the dataset proceeds.

mod nominatim;
mod rate_limit;

pub use nominatim::NominatimProvider;
pub use rate_limit::RequestGate;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::geo::{Position, Resolution};

/// Transient failures from a geocoding lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network-level failure: timeout, connect error, protocol error.
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("geocoding service returned HTTP {0}")]
    Status(StatusCode),

    /// The response body did not match the provider contract.
    #[error("malformed geocoding response: {0}")]
    InvalidBody(String),
}

/// Provider seam: maps a query string to at most one coordinate.
///
/// `Ok(None)` means the provider had no candidate match; errors are
/// reserved for transient service failures.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Option<Position>, GeocodeError>;
}

/// Resolver object owning the provider handle and the request gate.
pub struct Geocoder<P> {
    provider: P,
    gate: RequestGate,
}

impl<P: GeocodeProvider> Geocoder<P> {
    pub fn new(provider: P, gate: RequestGate) -> Self {
        Self { provider, gate }
    }

    /// Resolve one location string to a coordinate.
    ///
    /// Every call serializes through the shared gate. Blank input skips
    /// the provider entirely; provider failures are logged with the
    /// offending location and degrade to `Unresolved`.
    pub async fn resolve(&self, location: &str) -> Resolution {
        if location.trim().is_empty() {
            return Resolution::Unresolved;
        }

        self.gate.acquire().await;

        match self.provider.lookup(location).await {
            Ok(Some(position)) => Resolution::Resolved(position),
            Ok(None) => {
                debug!(location, "no geocoding match");
                Resolution::Unresolved
            }
            Err(err) => {
                warn!(location, error = %err, "geocoding failed");
                Resolution::Unresolved
            }
        }
    }
}
