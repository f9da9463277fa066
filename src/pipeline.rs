//! End-to-end ranking: resolve, spread, select.

use rand::Rng;

use crate::geo::{nearest, spread_duplicates, Position};
use crate::geocode::{GeocodeProvider, Geocoder};

/// Resolve every location string, spread coincident points apart, and
/// return the `k` sites nearest to `origin`, nearest first.
///
/// `on_location` is called with each location before it resolves, for
/// progress reporting. Unresolvable locations are dropped, so the result
/// holds at most `min(k, resolvable locations)` points.
pub async fn nearest_filming_sites<P, R>(
    geocoder: &Geocoder<P>,
    origin: Position,
    locations: &[String],
    k: usize,
    rng: &mut R,
    mut on_location: impl FnMut(&str),
) -> Vec<Position>
where
    P: GeocodeProvider,
    R: Rng,
{
    let mut resolutions = Vec::with_capacity(locations.len());
    for location in locations {
        on_location(location);
        resolutions.push(geocoder.resolve(location).await);
    }

    let spread = spread_duplicates(&resolutions, rng);
    nearest(origin, &spread, k)
}
