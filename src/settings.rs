use serde::{Deserialize, Serialize};

use crate::types::{CoordinateOrder, Position};

/// Controls how positions are handed to the shape adapter.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeOptions {
    /// Which component becomes `x`. `LngLat` matches `geo`'s convention.
    pub order: CoordinateOrder,
    /// Wrap longitudes into `(-180, 180]` before projecting.
    pub normalize_longitude: bool,
}

impl ShapeOptions {
    pub fn new(order: CoordinateOrder) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    pub fn with_normalized_longitude(mut self, normalize: bool) -> Self {
        self.normalize_longitude = normalize;
        self
    }

    pub fn coord(&self, position: &Position) -> geo::Coord {
        let position = if self.normalize_longitude {
            position.normalized()
        } else {
            *position
        };
        let (x, y) = position.project(self.order);
        geo::Coord { x, y }
    }
}
