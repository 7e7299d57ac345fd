// Full-sequence polyline decoding.
//
// Walks the byte string with a cursor, reconstructing quantized
// coordinates from cumulative deltas. Decoding is one-way with respect
// to simplification: points dropped before encoding are gone.

use thiserror::Error;

use crate::codec::chunk::{self, ChunkError};
use crate::codec::encoder::PRECISION;
use crate::geo::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A chunk run was truncated, malformed, or overflowed.
    #[error(transparent)]
    Chunk(#[from] ChunkError),
    /// The string ended after a latitude delta, mid coordinate pair.
    #[error("longitude delta missing at byte {offset}: polyline ends mid-pair")]
    MissingLongitude { offset: usize },
}

/// Decode a polyline string into its coordinate sequence.
///
/// Empty input produces an empty sequence. Truncated or invalid input
/// is an error, never a partial result: a silently shortened path would
/// corrupt downstream geometry.
pub fn decode(polyline: &str) -> Result<Vec<LatLng>, DecodeError> {
    let bytes = polyline.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0usize;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while pos < bytes.len() {
        let (delta_lat, next) = chunk::decode_value(bytes, pos)?;
        lat += delta_lat;

        if next >= bytes.len() {
            return Err(DecodeError::MissingLongitude { offset: next });
        }
        let (delta_lng, next) = chunk::decode_value(bytes, next)?;
        lng += delta_lng;
        pos = next;

        points.push(LatLng::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}
