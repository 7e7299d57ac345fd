// Coordinate and projection types.
//
// `LatLng` is the caller-facing coordinate; `PlanePoint` is the planar
// form the simplifier measures distances in. The `Projection` trait is
// the seam between them, so the core runs without any mapping toolkit.

pub mod mercator;

/// A geographic coordinate in degrees.
///
/// No bounds are enforced; callers own range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point in a planar projection, used for distance computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: PlanePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Maps geographic coordinates onto a plane for simplification.
///
/// Any projection whose unit distances are comparable across the whole
/// path works, as long as one `simplify` call uses one projection.
/// Simplification tolerances are measured in the projected plane's
/// units.
pub trait Projection {
    fn project(&self, coordinate: LatLng) -> PlanePoint;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = PlanePoint::new(123.4, -56.7);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn latlng_is_plain_data() {
        let c = LatLng::new(52.48855, 13.34262);
        assert_eq!(c.lat, 52.48855);
        assert_eq!(c.lng, 13.34262);
    }
}
