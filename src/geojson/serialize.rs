use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::{Coordinates, Geometry, GeometryType, Position};

impl Geometry {
    /// Canonical GeoJSON-shaped form, the inverse of [`Geometry::parse`].
    ///
    /// `point` and `circle` emit a bare `[lon, lat]` pair, collections emit
    /// `geometries` instead of `coordinates`, and circles carry `radius`.
    /// Unset coordinates are left out entirely.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.kind().as_str()));

        match self.raw_coordinates() {
            Some(Coordinates::Children(children)) => {
                map.insert(
                    "geometries".to_string(),
                    Value::Array(children.iter().map(Geometry::to_value).collect()),
                );
            }
            Some(Coordinates::Positions(positions)) => {
                let coordinates = match self.kind() {
                    GeometryType::Point | GeometryType::Circle => {
                        positions.first().map(position_value)
                    }
                    _ => Some(positions_value(positions)),
                };
                if let Some(coordinates) = coordinates {
                    map.insert("coordinates".to_string(), coordinates);
                }
            }
            Some(Coordinates::Rings(rings)) => {
                map.insert("coordinates".to_string(), rings_value(rings));
            }
            Some(Coordinates::Polygons(polygons)) => {
                map.insert(
                    "coordinates".to_string(),
                    Value::Array(polygons.iter().map(|rings| rings_value(rings)).collect()),
                );
            }
            None => {}
        }

        if self.kind() == GeometryType::Circle {
            map.insert(
                "radius".to_string(),
                self.radius_literal().to_value(self.radius()),
            );
        }

        Value::Object(map)
    }
}

/// Components written as integers in the source come back as integers.
fn position_value(position: &Position) -> Value {
    let [lon_literal, lat_literal] = position.literals();
    Value::Array(vec![
        lon_literal.to_value(position.longitude),
        lat_literal.to_value(position.latitude),
    ])
}

fn positions_value(positions: &[Position]) -> Value {
    Value::Array(positions.iter().map(position_value).collect())
}

fn rings_value(rings: &[Vec<Position>]) -> Value {
    Value::Array(rings.iter().map(|ring| positions_value(ring)).collect())
}

impl From<&Geometry> for Value {
    fn from(geometry: &Geometry) -> Self {
        geometry.to_value()
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Geometry::parse(&value))
    }
}
