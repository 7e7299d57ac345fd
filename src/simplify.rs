// Douglas-Peucker line simplification.
//
// Works over an explicit range stack rather than call-stack recursion:
// recursion depth is bounded only by point count, and paths with tens
// of thousands of points would otherwise run into stack limits.
//
// A range keeps only its farthest interior point when that point lies
// more than `tolerance` from the segment joining the range endpoints;
// the range then splits at it. Ranges whose interior stays within
// tolerance contribute nothing beyond their boundaries.

use crate::geo::PlanePoint;

/// Simplify a point sequence, keeping every point that deviates more
/// than `tolerance` (plane units) from the line joining its retained
/// neighbors.
///
/// Sequences of two or fewer points are returned unchanged. The first
/// and last points are always retained, and output preserves input
/// order with no duplicates. A negative tolerance retains all points;
/// a zero tolerance retains all points not exactly collinear with
/// their neighbors.
pub fn simplify(points: &[PlanePoint], tolerance: f64) -> Vec<PlanePoint> {
    let keep = keep_mask(points, tolerance);
    points
        .iter()
        .zip(&keep)
        .filter(|&(_, &kept)| kept)
        .map(|(&p, _)| p)
        .collect()
}

/// Compute the keep-mask Douglas-Peucker would apply to `points`.
///
/// Exposed within the crate so the adaptive encoder can select the
/// surviving original coordinates by index instead of round-tripping
/// them through the projection.
pub(crate) fn keep_mask(points: &[PlanePoint], tolerance: f64) -> Vec<bool> {
    let n = points.len();
    if n <= 2 {
        return vec![true; n];
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0usize, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }
        let (index, max_dist) = farthest_interior(points, start, end);
        if max_dist > tolerance {
            keep[index] = true;
            ranges.push((start, index));
            ranges.push((index, end));
        }
    }

    keep
}

/// Find the interior point of `(start, end)` farthest from the segment
/// between the range endpoints.
fn farthest_interior(points: &[PlanePoint], start: usize, end: usize) -> (usize, f64) {
    let a = points[start];
    let b = points[end];
    let mut max_dist = 0.0;
    let mut index = start + 1;

    for i in start + 1..end {
        let dist = segment_distance(points[i], a, b);
        if dist > max_dist {
            max_dist = dist;
            index = i;
        }
    }

    (index, max_dist)
}

/// Distance from `p` to the segment `a..b`.
///
/// Projects `p` onto the infinite line through the segment; when the
/// projection parameter falls outside `[0, 1]` the distance is to the
/// nearer endpoint. A zero-length segment degrades to point distance.
pub fn segment_distance(p: PlanePoint, a: PlanePoint, b: PlanePoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    if t < 0.0 {
        p.distance(a)
    } else if t > 1.0 {
        p.distance(b)
    } else {
        p.distance(PlanePoint::new(a.x + t * dx, a.y + t * dy))
    }
}
