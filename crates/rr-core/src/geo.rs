//! Geographic coordinate type.
//!
//! `Coordinate` stores `(lon, lat)` in `f64`.  Exact equality matters here:
//! duplicate-node detection compares coordinates bit-for-bit and nearest-node
//! ties are decided on exactly equal distances, so single precision would
//! merge points that the provider considers distinct.

use serde::{Deserialize, Serialize};

/// A WGS-84 position, longitude first (x, y order).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` when both components are finite (no NaN or ±∞).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Bitwise equality, so `NaN` compares equal to an identical `NaN` and
    /// `0.0` differs from `-0.0`.
    #[inline]
    pub fn same_bits(self, other: Coordinate) -> bool {
        self.lon.to_bits() == other.lon.to_bits() && self.lat.to_bits() == other.lat.to_bits()
    }

    /// `[lon, lat]` as used by the spatial index.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Squared planar distance in degree space.  This is the metric used for
    /// nearest-node resolution.
    #[inline]
    pub fn planar_distance_2(self, other: Coordinate) -> f64 {
        let dlon = self.lon - other.lon;
        let dlat = self.lat - other.lat;
        dlon * dlon + dlat * dlat
    }

    /// Haversine great-circle distance in metres.  Used to derive edge
    /// lengths when a provider has geometry but no length attribute.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        2.0 * R * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lon, self.lat)
    }
}
