use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean Earth radius in kilometers, treating the planet as a sphere.
///
/// This is the conventional 6371 km approximation, not an ellipsoidal
/// radius, and it is deliberately not configurable.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in decimal degrees (WGS84-style lat/lon).
///
/// Latitude conventionally lies in [-90, 90] and longitude in [-180, 180],
/// but neither range is enforced: any pair of floats is constructible and
/// every operation is total. Callers own semantic validity.
///
/// The serde field defaults make a missing `lat` or `lon` key decode to
/// `0.0` rather than fail; see the JSON codec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance to `other` in kilometers.
    ///
    /// Returns 0 for identical points and is symmetric up to float rounding.
    pub fn distance_km(&self, other: &Point) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Initial bearing (forward azimuth) from this point toward `other`.
    ///
    /// # Returns
    /// * Degrees in (-180, 180], as produced by `atan2`. Not normalized
    ///   to [0, 360). 0 is north, positive values turn clockwise.
    pub fn bearing_to(&self, other: &Point) -> f64 {
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees()
    }

    /// Destination reached by travelling along a great circle from this
    /// point.
    ///
    /// # Arguments
    /// * `distance_km` - Distance to travel in kilometers
    /// * `bearing_deg` - Initial compass bearing in degrees (0 = north,
    ///   clockwise)
    ///
    /// The longitude is wrapped into (-180, 180]. Inputs at the poles
    /// degenerate quietly rather than being guarded.
    pub fn destination(&self, distance_km: f64, bearing_deg: f64) -> Point {
        let dr = distance_km / EARTH_RADIUS_KM;
        let bearing = bearing_deg.to_radians();

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * dr.cos() + lat1.cos() * dr.sin() * bearing.cos()).asin();

        let lon2 = lon1
            + (bearing.sin() * dr.sin() * lat1.cos()).atan2(dr.cos() - lat1.sin() * lat2.sin());
        let lon2 = (lon2 + 3.0 * PI) % (2.0 * PI) - PI;

        Point::new(lat2.to_degrees(), lon2.to_degrees())
    }

    /// Great-circle midpoint between this point and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let lon1 = self.lon.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let bx = lat2.cos() * d_lon.cos();
        let by = lat2.cos() * d_lon.sin();

        let lat3 = (lat1.sin() + lat2.sin())
            .atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
        let lon3 = lon1 + by.atan2(lat1.cos() + bx);

        Point::new(lat3.to_degrees(), lon3.to_degrees())
    }
}
