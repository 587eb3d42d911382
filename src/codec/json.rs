//! JSON codec for points.
//!
//! The emitted form is the compact object `{"lat":<lat>,"lon":<lon>}`.
//! Decoding accepts any valid JSON object: unknown keys are ignored and a
//! missing `lat` or `lon` defaults to 0.0 rather than failing.

use serde::de::Error as _;

use super::CodecError;
use crate::geometry::Point;

/// Render a point as compact JSON.
pub fn to_json(point: &Point) -> Result<String, CodecError> {
    Ok(serde_json::to_string(point)?)
}

/// Parse a point from a JSON object.
///
/// Valid JSON that is not an object (e.g. a bare `[lat, lon]` array) is
/// rejected.
pub fn from_json(bytes: &[u8]) -> Result<Point, CodecError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(CodecError::Json(serde_json::Error::custom(
            "expected a JSON object",
        )));
    }

    Ok(serde_json::from_value(value)?)
}
