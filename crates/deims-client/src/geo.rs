// Great-circle distance and proximity filtering.
//
// The registry has no server-side radius query; "sites near a point" is
// served by fetching candidates and filtering locally. Haversine on a
// spherical Earth is accurate to ~0.5% at any latitude, which is plenty
// for a site search -- planar degree-based distance is not, near the poles.

use crate::models::{Point, SiteListing};

/// Mean Earth radius in metres (spherical approximation).
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in metres between two WGS84 coordinates,
/// via the haversine formula on a sphere of [`MEAN_EARTH_RADIUS_M`].
pub fn haversine_distance_m(a: Point, b: Point) -> f64 {
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push h fractionally above 1 for near-antipodal pairs;
    // asin would then return NaN.
    2.0 * MEAN_EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Retain the candidates within `distance_m` metres of `(lat, lon)`.
///
/// A stable filter: the output is a subsequence of `candidates` in the
/// original order -- results are never re-sorted by distance. Candidates
/// without a coordinate are excluded, not errored. The boundary is
/// inclusive, so a zero radius retains exactly-coincident candidates.
pub fn sites_within_radius(
    lat: f64,
    lon: f64,
    distance_m: f64,
    candidates: Vec<SiteListing>,
) -> Vec<SiteListing> {
    let center = Point { lat, lon };
    candidates
        .into_iter()
        .filter(|site| {
            site.coordinates
                .is_some_and(|c| haversine_distance_m(center, c) <= distance_m)
        })
        .collect()
}
