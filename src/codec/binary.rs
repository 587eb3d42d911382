//! Fixed-width binary codec for points.
//!
//! Wire layout, 16 bytes total:
//! - 8 byte f64 latitude (little endian)
//! - 8 byte f64 longitude (little endian)
//!
//! No magic number, no length prefix, no version tag. The format is fixed
//! and positional.

use super::CodecError;
use crate::geometry::Point;

/// Encoded size of a point in bytes.
pub const ENCODED_LEN: usize = 16;

/// Encode a point into its 16-byte wire form.
pub fn encode(point: &Point) -> [u8; ENCODED_LEN] {
    let mut buf = [0u8; ENCODED_LEN];
    buf[0..8].copy_from_slice(&point.lat.to_le_bytes());
    buf[8..16].copy_from_slice(&point.lon.to_le_bytes());
    buf
}

/// Decode a point from its wire form.
///
/// Reads exactly the first 16 bytes; anything after them is ignored.
/// Fails when the buffer is shorter than 16 bytes, without producing a
/// partial point.
pub fn decode(bytes: &[u8]) -> Result<Point, CodecError> {
    if bytes.len() < ENCODED_LEN {
        return Err(CodecError::Truncated {
            expected: ENCODED_LEN,
            got: bytes.len(),
        });
    }

    let lat = f64::from_le_bytes(bytes[0..8].try_into().unwrap());
    let lon = f64::from_le_bytes(bytes[8..16].try_into().unwrap());

    Ok(Point::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let p = Point::new(40.7486, -73.9864);
        let encoded = encode(&p);

        let mut expected = Vec::new();
        expected.extend_from_slice(&40.7486_f64.to_le_bytes());
        expected.extend_from_slice(&(-73.9864_f64).to_le_bytes());

        assert_eq!(encoded.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        let p = Point::new(40.7486, -73.9864);
        let decoded = decode(&encode(&p)).unwrap();

        assert_eq!(decoded.lat, p.lat);
        assert_eq!(decoded.lon, p.lon);
    }

    #[test]
    fn test_decode_truncated_buffer() {
        let encoded = encode(&Point::new(1.0, 2.0));

        assert!(matches!(
            decode(&encoded[..15]),
            Err(CodecError::Truncated { expected: 16, got: 15 })
        ));
        assert!(matches!(
            decode(&encoded[..8]),
            Err(CodecError::Truncated { .. })
        ));
        assert!(matches!(decode(&[]), Err(CodecError::Truncated { .. })));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let p = Point::new(47.4489, -122.3094);
        let mut buf = encode(&p).to_vec();
        buf.extend_from_slice(&[0xAB; 4]);

        let decoded = decode(&buf).unwrap();
        assert_eq!(decoded, p);
    }
}
