// Full-sequence polyline encoding.
//
// Coordinates are quantized to a 1e-5 degree grid, then each axis is
// delta-encoded against the previous point and chunk-encoded. Latitude
// precedes longitude, with no separators between values or points.

use crate::codec::chunk;
use crate::geo::LatLng;

/// Quantization scale: 5 decimal digits, about 1.1 m at the equator.
///
/// Encode and decode must agree on this value for round-trips to hold.
pub const PRECISION: f64 = 1e5;

/// Quantize one coordinate axis to integer grid units.
///
/// `f64::round` rounds half away from zero, matching the reference
/// `round` semantics.
#[inline]
pub(crate) fn quantize(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

/// Encode a coordinate sequence into a polyline string.
///
/// Empty input produces an empty string. No simplification happens
/// here; see [`crate::policy::encode`] for policy-driven encoding.
pub fn encode_points(points: &[LatLng]) -> String {
    let mut out = String::new();
    let mut last_lat: i64 = 0;
    let mut last_lng: i64 = 0;

    for point in points {
        let lat = quantize(point.lat);
        let lng = quantize(point.lng);

        chunk::encode_value(lat - last_lat, &mut out);
        chunk::encode_value(lng - last_lng, &mut out);

        last_lat = lat;
        last_lng = lng;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_empty_string() {
        assert_eq!(encode_points(&[]), "");
    }

    #[test]
    fn single_point_fixture() {
        let points = [LatLng::new(52.48855, 13.34262)];
        assert_eq!(encode_points(&points), "mtj_Ik~lpA");
    }

    #[test]
    fn canonical_three_point_fixture() {
        let points = [
            LatLng::new(38.5, -120.2),
            LatLng::new(40.7, -120.95),
            LatLng::new(43.252, -126.453),
        ];
        assert_eq!(encode_points(&points), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn origin_encodes_as_two_chunks() {
        assert_eq!(encode_points(&[LatLng::new(0.0, 0.0)]), "??");
    }

    #[test]
    fn repeated_point_has_zero_deltas() {
        let p = LatLng::new(52.48855, 13.34262);
        let encoded = encode_points(&[p, p]);
        assert_eq!(encoded, "mtj_Ik~lpA??");
    }

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(0.000005), 1);
        assert_eq!(quantize(-0.000005), -1);
        assert_eq!(quantize(0.000004), 0);
        assert_eq!(quantize(-0.000004), 0);
    }
}
