use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::error::GeoJsonError;
use crate::types::{Coordinates, DEFAULT_CIRCLE_RADIUS, Geometry, GeometryType, NumberLiteral, Position};

impl Geometry {
    /// Builds a geometry from a GeoJSON-shaped JSON object.
    ///
    /// The declared `type` decides how deep the `coordinates` array is read.
    /// Missing or unrecognised types give an `unknown` geometry, and
    /// coordinates of the wrong shape are left unset rather than failing.
    pub fn parse(value: &Value) -> Geometry {
        let Some(kind) = value
            .get("type")
            .and_then(Value::as_str)
            .map(GeometryType::from_name)
        else {
            debug!("Geometry has no type, treating as unknown");
            return Geometry::unknown();
        };
        if kind == GeometryType::Unknown {
            debug!("Unrecognised geometry type: {:?}", value.get("type"));
            return Geometry::unknown();
        }

        let coordinates = value.get("coordinates");
        let parsed = match kind {
            GeometryType::Point | GeometryType::Circle => {
                coordinates.and_then(parse_position).map(|p| Coordinates::Positions(vec![p]))
            }
            GeometryType::MultiPoint | GeometryType::LineString => {
                coordinates.and_then(parse_positions).map(Coordinates::Positions)
            }
            GeometryType::MultiLineString | GeometryType::Polygon => {
                coordinates.and_then(parse_rings).map(Coordinates::Rings)
            }
            GeometryType::MultiPolygon => coordinates.and_then(parse_polygons).map(Coordinates::Polygons),
            GeometryType::GeometryCollection => value
                .get("geometries")
                .and_then(Value::as_array)
                .map(|geometries| Coordinates::Children(geometries.iter().map(Geometry::parse).collect())),
            GeometryType::Unknown => None,
        };

        if parsed.is_none() {
            debug!("{} geometry has no usable coordinates", kind);
        }

        let radius = match kind {
            GeometryType::Circle => value.get("radius").and_then(|radius| match radius {
                Value::Number(number) => number.as_f64().map(|r| (r, NumberLiteral::of(number))),
                _ => None,
            }),
            _ => None,
        };
        let (radius, literal) = match (kind, radius) {
            (_, Some(radius)) => radius,
            (GeometryType::Circle, None) => (DEFAULT_CIRCLE_RADIUS, NumberLiteral::Float),
            _ => (0.0, NumberLiteral::Float),
        };

        Geometry::from_parts(kind, parsed, radius).with_radius_literal(literal)
    }
}

impl From<&Value> for Geometry {
    fn from(value: &Value) -> Self {
        Geometry::parse(value)
    }
}

impl From<Value> for Geometry {
    fn from(value: Value) -> Self {
        Geometry::parse(&value)
    }
}

impl FromStr for Geometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Geometry::parse(&value))
    }
}

/// A flat number array with at least two entries. Extra entries (altitude)
/// are ignored, but must still be numbers.
fn parse_position(value: &Value) -> Option<Position> {
    let numbers = value
        .as_array()?
        .iter()
        .map(|n| match n {
            Value::Number(number) => Some((number.as_f64()?, NumberLiteral::of(number))),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    match numbers.as_slice() {
        [(longitude, lon_literal), (latitude, lat_literal), ..] => {
            Some(Position::with_literals(*longitude, *latitude, [*lon_literal, *lat_literal]))
        }
        _ => None,
    }
}

fn parse_positions(value: &Value) -> Option<Vec<Position>> {
    value.as_array()?.iter().map(parse_position).collect()
}

fn parse_rings(value: &Value) -> Option<Vec<Vec<Position>>> {
    value.as_array()?.iter().map(parse_positions).collect()
}

fn parse_polygons(value: &Value) -> Option<Vec<Vec<Vec<Position>>>> {
    value.as_array()?.iter().map(parse_rings).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn point_is_stored_as_single_position() {
        let geometry = Geometry::parse(&json!({
            "type": "point",
            "coordinates": [-105.01621, 39.57422]
        }));
        assert_eq!(geometry.kind(), GeometryType::Point);
        assert_eq!(geometry.coordinates(), Some(&[Position::new(-105.01621, 39.57422)][..]));
        assert!(geometry.ring_coordinates().is_none());
        assert!(geometry.polygon_coordinates().is_none());
        assert_eq!(geometry.center(), Some(Position::new(-105.01621, 39.57422)));
        assert_eq!(geometry.radius(), 0.0);
    }

    #[test]
    fn missing_or_unknown_type_is_unknown() {
        for value in [
            json!({ "coordinates": [1.0, 2.0] }),
            json!({ "type": "Point", "coordinates": [1.0, 2.0] }),
            json!({ "type": 7 }),
            json!([1.0, 2.0]),
        ] {
            let geometry = Geometry::parse(&value);
            assert_eq!(geometry.kind(), GeometryType::Unknown);
            assert!(geometry.raw_coordinates().is_none());
            assert_eq!(geometry.radius(), 0.0);
        }
    }

    #[test]
    fn depth_follows_declared_type() {
        // Two pairs of two: guessing the depth from the data can't tell this from a point list.
        let coordinates = json!([[1.0, 2.0], [3.0, 4.0]]);

        let line = Geometry::parse(&json!({ "type": "lineString", "coordinates": coordinates }));
        assert_eq!(line.coordinates().map(<[_]>::len), Some(2));

        let point = Geometry::parse(&json!({ "type": "point", "coordinates": coordinates }));
        assert!(point.raw_coordinates().is_none());

        let polygon = Geometry::parse(&json!({ "type": "polygon", "coordinates": coordinates }));
        assert!(polygon.raw_coordinates().is_none());
        assert!(polygon.center().is_none());
    }

    #[test]
    fn mismatched_depth_leaves_coordinates_unset() {
        let geometry = Geometry::parse(&json!({
            "type": "multiPolygon",
            "coordinates": [[[1.0, 2.0]]]
        }));
        assert_eq!(geometry.kind(), GeometryType::MultiPolygon);
        assert!(geometry.raw_coordinates().is_none());
        assert!(geometry.center().is_none());
    }

    #[test]
    fn non_numeric_pairs_are_rejected() {
        let geometry = Geometry::parse(&json!({
            "type": "multiPoint",
            "coordinates": [[1.0, 2.0], ["a", 3.0]]
        }));
        assert!(geometry.coordinates().is_none());
    }

    #[test]
    fn altitude_is_ignored() {
        let geometry = Geometry::parse(&json!({
            "type": "point",
            "coordinates": [1.0, 2.0, 300.0]
        }));
        assert_eq!(geometry.coordinates(), Some(&[Position::new(1.0, 2.0)][..]));
    }

    #[test]
    fn circle_radius_defaults_to_one_mile() {
        let geometry = Geometry::parse(&json!({ "type": "circle", "coordinates": [0.5, 51.5] }));
        assert_eq!(geometry.radius(), DEFAULT_CIRCLE_RADIUS);
        assert_eq!(geometry.center(), Some(Position::new(0.5, 51.5)));

        let geometry = Geometry::parse(&json!({
            "type": "circle",
            "coordinates": [0.5, 51.5],
            "radius": -20.0
        }));
        assert_eq!(geometry.radius(), -20.0);
    }

    #[test]
    fn collection_parses_children_recursively() {
        let geometry = Geometry::parse(&json!({
            "type": "geometryCollection",
            "geometries": [
                { "type": "point", "coordinates": [1.0, 2.0] },
                { "type": "lineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]] },
                { "type": "nonsense" }
            ]
        }));
        let children = geometry.children().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].kind(), GeometryType::Point);
        assert_eq!(children[1].kind(), GeometryType::LineString);
        assert_eq!(children[2].kind(), GeometryType::Unknown);
        assert!(geometry.coordinates().is_none());
        assert!(geometry.center().is_none());
    }

    #[test]
    fn from_str_reports_bad_json() {
        assert!(matches!("{".parse::<Geometry>(), Err(GeoJsonError::Json(_))));
        let geometry: Geometry = r#"{"type":"point","coordinates":[1.5,2.5]}"#.parse().unwrap();
        assert_eq!(geometry.kind(), GeometryType::Point);
    }
}
