//! Slimline: encoded-polyline codec with adaptive simplification.
//!
//! The crate provides:
//! - A delta codec for the polyline wire format (`codec`)
//! - Douglas-Peucker line simplification (`simplify`)
//! - Coordinate and projection types (`geo`)
//! - Policy-driven encoding that bounds output length (`policy`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use slimline::{encode, decode, LatLng, SimplificationPolicy};
//!
//! let path = vec![
//!     LatLng::new(38.5, -120.2),
//!     LatLng::new(40.7, -120.95),
//!     LatLng::new(43.252, -126.453),
//! ];
//!
//! let polyline = encode(&path, &SimplificationPolicy::None).unwrap();
//! assert_eq!(polyline, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//!
//! let decoded = decode(&polyline).unwrap();
//! assert_eq!(decoded.len(), path.len());
//! ```

pub mod codec;
pub mod geo;
pub mod policy;
pub mod simplify;

#[cfg(feature = "cli")]
pub mod cli;

pub use codec::decoder::{DecodeError, decode};
pub use codec::encoder::encode_points;
pub use geo::mercator::WebMercator;
pub use geo::{LatLng, PlanePoint, Projection};
pub use policy::{
    EncodeSummary, PolicyError, SimplificationPolicy, encode, encode_summary,
    encode_summary_with_projection, encode_with_projection,
};
pub use simplify::simplify;
