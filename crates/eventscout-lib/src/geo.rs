//! Geohash encoding of client coordinates.
//!
//! The Discovery API accepts a `geoPoint` query parameter instead of raw
//! latitude/longitude. Encoding is delegated to the `geohash` crate; this
//! module only fixes the precision and maps failures into [`Error`].

use geohash::Coord;

use crate::error::{Error, Result};

/// Number of geohash characters passed upstream as `geoPoint`.
pub const GEOHASH_PRECISION: usize = 7;

/// Encode a longitude/latitude pair into a fixed-precision geohash.
///
/// Pure and deterministic: the same pair always yields the same string.
/// Out-of-range or non-finite coordinates yield [`Error::Geocode`]
/// instead of panicking.
///
/// # Example
///
/// ```
/// use eventscout_lib::encode_geopoint;
///
/// let hash = encode_geopoint(10.40744, 57.64911).unwrap();
/// assert_eq!(hash, "u4pruyd");
/// ```
pub fn encode_geopoint(longitude: f64, latitude: f64) -> Result<String> {
    geohash::encode(
        Coord {
            x: longitude,
            y: latitude,
        },
        GEOHASH_PRECISION,
    )
    .map_err(|e| Error::Geocode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_point() {
        // Reference value for 57.64911 N, 10.40744 E truncated to 7 chars.
        let hash = encode_geopoint(10.40744, 57.64911).unwrap();
        assert_eq!(hash, "u4pruyd");
    }

    #[test]
    fn encoding_is_deterministic() {
        let first = encode_geopoint(-74.0, 40.7).unwrap();
        let second = encode_geopoint(-74.0, 40.7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn encoding_has_fixed_precision() {
        let hash = encode_geopoint(-122.4194, 37.7749).unwrap();
        assert_eq!(hash.len(), GEOHASH_PRECISION);
    }

    #[test]
    fn out_of_range_latitude_is_an_error() {
        let err = encode_geopoint(-74.0, 120.0).unwrap_err();
        match err {
            Error::Geocode { .. } => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn out_of_range_longitude_is_an_error() {
        assert!(encode_geopoint(200.0, 40.7).is_err());
    }
}
