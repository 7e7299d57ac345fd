// Policy-driven encoding: ties simplification to the codec.
//
// Orchestrates: project coordinates to the plane, run Douglas-Peucker
// under the selected policy, encode the surviving coordinates. The
// surviving points are selected from the original sequence by index,
// so simplification never perturbs the coordinates it keeps.

use log::debug;
use thiserror::Error;

use crate::codec::encoder::encode_points;
use crate::geo::mercator::WebMercator;
use crate::geo::{LatLng, PlanePoint, Projection};
use crate::simplify::keep_mask;

/// Tolerance value the reference implementation treats as "do not
/// simplify". One plane unit is far below the quantization grid, so
/// the value doubles as the automatic search's starting factor.
pub const NOOP_TOLERANCE: f64 = 1.0;

/// Tolerance increment per automatic search iteration.
const SEARCH_STEP: f64 = 0.5;

/// How the encoder reduces point count before encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplificationPolicy {
    /// Encode the sequence as-is.
    None,
    /// Simplify once with a fixed plane-unit tolerance. The value
    /// [`NOOP_TOLERANCE`] is honored as the reference no-op sentinel
    /// and skips simplification entirely.
    FixedTolerance(f64),
    /// Search for the smallest stepped tolerance whose encoding fits
    /// in `max_length` characters.
    Automatic { max_length: usize },
}

impl Default for SimplificationPolicy {
    fn default() -> Self {
        // Reference default budget.
        SimplificationPolicy::Automatic { max_length: 2048 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Automatic policy with a zero length budget can never be met.
    #[error("automatic policy requires a max_length of at least 1")]
    InvalidMaxLength,
}

/// What an encode actually did, for callers that want observability.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeSummary {
    /// The encoded polyline.
    pub polyline: String,
    /// Points supplied by the caller.
    pub input_points: usize,
    /// Points that survived simplification and were encoded.
    pub kept_points: usize,
    /// Tolerance actually applied, if any simplification ran.
    pub tolerance: Option<f64>,
}

/// Encode a coordinate sequence under `policy`, projecting with
/// [`WebMercator`] for simplification distances.
pub fn encode(points: &[LatLng], policy: &SimplificationPolicy) -> Result<String, PolicyError> {
    encode_with_projection(points, policy, &WebMercator)
}

/// Encode with a caller-supplied projection.
pub fn encode_with_projection<P: Projection>(
    points: &[LatLng],
    policy: &SimplificationPolicy,
    projection: &P,
) -> Result<String, PolicyError> {
    Ok(encode_summary_with_projection(points, policy, projection)?.polyline)
}

/// Encode under `policy` and report what was done.
pub fn encode_summary(
    points: &[LatLng],
    policy: &SimplificationPolicy,
) -> Result<EncodeSummary, PolicyError> {
    encode_summary_with_projection(points, policy, &WebMercator)
}

/// Encode with a caller-supplied projection and report what was done.
pub fn encode_summary_with_projection<P: Projection>(
    points: &[LatLng],
    policy: &SimplificationPolicy,
    projection: &P,
) -> Result<EncodeSummary, PolicyError> {
    match *policy {
        SimplificationPolicy::None => Ok(raw_summary(points)),
        SimplificationPolicy::FixedTolerance(tolerance) => {
            if tolerance == NOOP_TOLERANCE {
                return Ok(raw_summary(points));
            }
            let kept = simplified_points(points, tolerance, projection);
            let polyline = encode_points(&kept);
            Ok(EncodeSummary {
                polyline,
                input_points: points.len(),
                kept_points: kept.len(),
                tolerance: Some(tolerance),
            })
        }
        SimplificationPolicy::Automatic { max_length } => {
            if max_length == 0 {
                return Err(PolicyError::InvalidMaxLength);
            }
            Ok(automatic_search(points, max_length, projection))
        }
    }
}

fn raw_summary(points: &[LatLng]) -> EncodeSummary {
    EncodeSummary {
        polyline: encode_points(points),
        input_points: points.len(),
        kept_points: points.len(),
        tolerance: None,
    }
}

/// Simplify in the projected plane, then select the surviving original
/// coordinates by index.
fn simplified_points<P: Projection>(
    points: &[LatLng],
    tolerance: f64,
    projection: &P,
) -> Vec<LatLng> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let plane: Vec<PlanePoint> = points.iter().map(|&c| projection.project(c)).collect();
    let keep = keep_mask(&plane, tolerance);
    points
        .iter()
        .zip(&keep)
        .filter(|&(_, &kept)| kept)
        .map(|(&p, _)| p)
        .collect()
}

/// Stepped tolerance search, reference-compatible: the first attempt
/// encodes raw, then each iteration adds 0.5 and re-simplifies from
/// the original points rather than refining the previous pass.
///
/// Termination: tolerance grows without bound while point count can
/// only shrink, and a two-point sequence is the floor Douglas-Peucker
/// can reach. Once at the floor the search stops, returning the best
/// achievable string even when it still exceeds `max_length`.
fn automatic_search<P: Projection>(
    points: &[LatLng],
    max_length: usize,
    projection: &P,
) -> EncodeSummary {
    let mut factor = NOOP_TOLERANCE;
    let mut summary = raw_summary(points);

    while summary.polyline.len() > max_length {
        if summary.kept_points <= 2 {
            debug!(
                "length budget {max_length} unreachable: {} chars at the two-point floor",
                summary.polyline.len()
            );
            break;
        }
        factor += SEARCH_STEP;
        let kept = simplified_points(points, factor, projection);
        summary = EncodeSummary {
            polyline: encode_points(&kept),
            input_points: points.len(),
            kept_points: kept.len(),
            tolerance: Some(factor),
        };
        debug!(
            "tolerance {factor}: {} of {} points, {} chars",
            summary.kept_points,
            points.len(),
            summary.polyline.len()
        );
    }

    summary
}
