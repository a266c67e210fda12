use serde::{Deserialize, Serialize};

use super::NumberLiteral;
use crate::error::{GeoJsonError, Result};

/// Which way round a consumer wants a coordinate pair handed to it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinateOrder {
    /// `(latitude, longitude)`
    LatLng,
    /// `(longitude, latitude)`, the GeoJSON order.
    #[default]
    LngLat,
}

/// A longitude/latitude pair. Values are stored exactly as given, no wrapping
/// or clamping is applied.
///
/// Equality looks at the two values only, not at whether they were written
/// as integers in the source JSON.
#[derive(Default, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    literals: [NumberLiteral; 2],
}

impl Position {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            literals: [NumberLiteral::Float; 2],
        }
    }

    pub(crate) fn with_literals(
        longitude: f64,
        latitude: f64,
        literals: [NumberLiteral; 2],
    ) -> Self {
        Self {
            longitude,
            latitude,
            literals,
        }
    }

    pub(crate) fn literals(&self) -> [NumberLiteral; 2] {
        self.literals
    }

    /// Builds a position from a GeoJSON number array, missing components are zero.
    pub fn from_slice(coordinates: &[f64]) -> Self {
        Self::new(
            coordinates.first().copied().unwrap_or_default(),
            coordinates.get(1).copied().unwrap_or_default(),
        )
    }

    /// Returns the pair in the requested order.
    ///
    /// `LatLng` yields `(latitude, longitude)` and `LngLat` yields
    /// `(longitude, latitude)`.
    pub fn project(&self, order: CoordinateOrder) -> (f64, f64) {
        match order {
            CoordinateOrder::LatLng => (self.latitude, self.longitude),
            CoordinateOrder::LngLat => (self.longitude, self.latitude),
        }
    }

    /// `[longitude, latitude]`
    pub fn to_array(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Same latitude with the longitude wrapped into `(-180, 180]`.
    pub fn normalized(&self) -> Self {
        Self {
            longitude: normalize_longitude(self.longitude),
            ..*self
        }
    }

    /// Bounding-box midpoint of `positions`.
    ///
    /// A single position is returned unchanged. This is not a centroid: only
    /// the extreme longitudes and latitudes take part.
    ///
    /// # Errors
    ///
    /// [`GeoJsonError::EmptyPositions`] when `positions` is empty.
    pub fn center(positions: &[Position]) -> Result<Position> {
        match positions {
            [] => Err(GeoJsonError::EmptyPositions),
            [single] => Ok(*single),
            [first, rest @ ..] => {
                let (mut min_lon, mut max_lon) = (first.longitude, first.longitude);
                let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
                for position in rest {
                    min_lon = min_lon.min(position.longitude);
                    max_lon = max_lon.max(position.longitude);
                    min_lat = min_lat.min(position.latitude);
                    max_lat = max_lat.max(position.latitude);
                }
                Ok(Position::new(
                    (max_lon + min_lon) * 0.5,
                    (max_lat + min_lat) * 0.5,
                ))
            }
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("longitude", &self.longitude)
            .field("latitude", &self.latitude)
            .finish()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}

impl From<[f64; 2]> for Position {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        position.to_array()
    }
}

impl From<Position> for geo::Coord {
    fn from(position: Position) -> Self {
        geo::Coord {
            x: position.longitude,
            y: position.latitude,
        }
    }
}

/// Wraps a longitude into `(-180, 180]`.
///
/// In-range values come back untouched. Non-finite input is returned as is.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() || (longitude > -180.0 && longitude <= 180.0) {
        return longitude;
    }
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}
