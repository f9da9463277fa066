//! Spreads exactly-coincident points apart so each renders as its own
//! marker.

use std::collections::HashMap;

use rand::Rng;

use super::{Position, Resolution};

/// Half-width of the jitter interval, in degrees. Roughly 500 m of
/// latitude: small against inter-city distances, large enough that a
/// repeat collision is improbable.
pub const JITTER_DEGREES: f64 = 0.005;

/// Drop unresolved entries and perturb every occurrence of a duplicated
/// position by an independent uniform offset on each axis.
///
/// Positions that occur exactly once pass through bit-identical. A
/// post-jitter collision is tolerated rather than re-tried; the RNG is
/// injected so callers can make the offsets deterministic.
pub fn spread_duplicates<R: Rng>(points: &[Resolution], rng: &mut R) -> Vec<Position> {
    let resolved: Vec<Position> = points.iter().filter_map(|r| r.position()).collect();

    let mut occurrences: HashMap<(u64, u64), usize> = HashMap::new();
    for position in &resolved {
        *occurrences.entry(position.bits()).or_default() += 1;
    }

    resolved
        .into_iter()
        .map(|position| {
            if occurrences[&position.bits()] > 1 {
                Position::new(
                    position.latitude + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES),
                    position.longitude + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES),
                )
            } else {
                position
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn drops_unresolved_entries() {
        let points = [
            Resolution::Unresolved,
            Resolution::Resolved(Position::new(50.45, 30.52)),
            Resolution::Unresolved,
        ];
        let spread = spread_duplicates(&points, &mut rng());
        assert_eq!(spread, vec![Position::new(50.45, 30.52)]);
    }

    #[test]
    fn duplicates_become_pairwise_distinct() {
        let boston = Position::new(42.36, -71.06);
        let kiev = Position::new(50.45, 30.52);
        let points = [
            Resolution::Resolved(boston),
            Resolution::Resolved(kiev),
            Resolution::Resolved(boston),
        ];

        let spread = spread_duplicates(&points, &mut rng());
        assert_eq!(spread.len(), 3);
        for (i, a) in spread.iter().enumerate() {
            for b in &spread[i + 1..] {
                assert_ne!(a.bits(), b.bits());
            }
        }

        // The point that was unique in the input passes through untouched.
        assert_eq!(spread[1].bits(), kiev.bits());
    }

    #[test]
    fn jitter_stays_within_the_interval() {
        let site = Position::new(48.86, 2.35);
        let points = [Resolution::Resolved(site), Resolution::Resolved(site)];

        for moved in spread_duplicates(&points, &mut rng()) {
            assert!((moved.latitude - site.latitude).abs() <= JITTER_DEGREES);
            assert!((moved.longitude - site.longitude).abs() <= JITTER_DEGREES);
        }
    }

    #[test]
    fn deterministic_under_a_seeded_rng() {
        let site = Position::new(48.86, 2.35);
        let points = [Resolution::Resolved(site), Resolution::Resolved(site)];

        let first = spread_duplicates(&points, &mut rng());
        let second = spread_duplicates(&points, &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn unique_points_never_consume_randomness() {
        let points = [
            Resolution::Resolved(Position::new(42.36, -71.06)),
            Resolution::Resolved(Position::new(50.45, 30.52)),
        ];
        let spread = spread_duplicates(&points, &mut rng());
        assert_eq!(
            spread,
            vec![Position::new(42.36, -71.06), Position::new(50.45, 30.52)]
        );
    }
}
