//! Nearest-point selection.

use std::cmp::Ordering;

use super::{haversine_m, Position};

/// The `k` points nearest to `origin`, nearest first.
///
/// The sort is stable and ties keep their input order. `k` larger than
/// the available point count yields everything; `k == 0` yields nothing.
pub fn nearest(origin: Position, points: &[Position], k: usize) -> Vec<Position> {
    let mut ranked: Vec<(f64, Position)> = points
        .iter()
        .map(|point| (haversine_m(origin, *point), *point))
        .collect();

    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    ranked.into_iter().map(|(_, point)| point).collect()
}
