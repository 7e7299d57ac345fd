// Encoded-polyline wire format.
//
// The format packs a coordinate sequence as successive integer deltas,
// each delta zig-zag transformed and split into 5-bit chunks carried in
// printable ASCII. Compatible with the polyline algorithm used by the
// major mapping platforms.
//
// # Modules
//
// - `chunk`   — Per-integer variable-length chunk codec (zig-zag + continuation bit)
// - `encoder` — Quantization, delta composition, full-sequence encode
// - `decoder` — Cursor walk, accumulator reconstruction, full-sequence decode

pub mod chunk;
pub mod decoder;
pub mod encoder;

// Re-export key items for convenience.
pub use chunk::ChunkError;
pub use decoder::{DecodeError, decode};
pub use encoder::{PRECISION, encode_points};
