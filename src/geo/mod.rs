//! Geographic primitives: positions, great-circle distance, duplicate
//! spreading, and nearest-point selection.

mod distance;
mod jitter;
mod nearest;

pub use distance::{distance_m, haversine_m, EARTH_RADIUS_M};
pub use jitter::{spread_duplicates, JITTER_DEGREES};
pub use nearest::nearest;

/// A point on the Earth's surface, in degrees.
///
/// Values are never mutated in place; jitter and ranking always produce
/// new positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Bitwise identity key. Exact-equality grouping has to distinguish
    /// `0.0` from `-0.0` and cope with the full float range, so the raw
    /// bits are the grouping key rather than `PartialEq`.
    pub(crate) fn bits(&self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

/// Outcome of geocoding one location string.
///
/// Resolution is atomic: either both coordinates are present or neither
/// is. There is no partially-filled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The provider produced a usable coordinate.
    Resolved(Position),
    /// The provider had no match or the lookup failed.
    Unresolved,
}

impl Resolution {
    /// The coordinate, if one was resolved.
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Resolved(position) => Some(position),
            Self::Unresolved => None,
        }
    }

}
