//! Web Mercator projection (spherical, EPSG:3857 layout) scaled to a
//! 2^28-unit world.
//!
//! forward: x = W·(0.5 + λ/360), y = W·(0.5 - ln(tan(π/4 + φ/2))/2π)
//!
//! The 2^28 world width matches the map-point plane of the reference
//! platform toolkit, so one plane unit is well under a meter at the
//! equator and the stock tolerance steps (1.0, 1.5, 2.0, …) keep their
//! reference magnitude.

use std::f64::consts::{FRAC_PI_4, PI};

use crate::geo::{LatLng, PlanePoint, Projection};

/// World width/height in plane units (2^28).
pub const WORLD_SIZE: f64 = 268_435_456.0;

/// Maximum latitude the projection is bounded to (≈85.0511°),
/// `atan(sinh(π))` in radians.
const MAX_LAT: f64 = 1.4844222297453324;

/// Spherical Web Mercator over a fixed-size square world.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn project(&self, coordinate: LatLng) -> PlanePoint {
        let lat = coordinate.lat.to_radians().clamp(-MAX_LAT, MAX_LAT);
        let x = WORLD_SIZE * (0.5 + coordinate.lng / 360.0);
        let y = WORLD_SIZE * (0.5 - (FRAC_PI_4 + lat / 2.0).tan().ln() / (2.0 * PI));
        PlanePoint::new(x, y)
    }
}
