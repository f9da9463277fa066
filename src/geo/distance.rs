//! Great-circle distance on a spherical Earth approximation.

use super::{Position, Resolution};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two positions, in meters.
///
/// Symmetric by construction, and exactly zero for identical inputs.
pub fn haversine_m(a: Position, b: Position) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let hav = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    // Rounding can push hav a hair past 1 for near-antipodal pairs,
    // which would take asin out of its domain.
    2.0 * EARTH_RADIUS_M * hav.sqrt().min(1.0).asin()
}

/// Distance between two resolution outcomes, in meters.
///
/// An unresolved side yields positive infinity so unresolved points sort
/// to the end without call sites special-casing them.
pub fn distance_m(a: &Resolution, b: &Resolution) -> f64 {
    match (a, b) {
        (Resolution::Resolved(a), Resolution::Resolved(b)) => haversine_m(*a, *b),
        _ => f64::INFINITY,
    }
}
