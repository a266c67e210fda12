//! Conversions to and from the `geojson` crate's standard geometry types.
//! `circle` and `unknown` have no standard counterpart.

use crate::error::GeoJsonError;
use crate::types::{Coordinates, Geometry, GeometryType, Position};

fn to_position(position: &Position) -> geojson::Position {
    vec![position.longitude, position.latitude]
}

fn to_line(positions: &[Position]) -> Vec<geojson::Position> {
    positions.iter().map(to_position).collect()
}

fn to_rings(rings: &[Vec<Position>]) -> Vec<Vec<geojson::Position>> {
    rings.iter().map(|ring| to_line(ring)).collect()
}

fn from_line(positions: &[geojson::Position]) -> Vec<Position> {
    positions.iter().map(|p| Position::from_slice(p)).collect()
}

fn from_rings(rings: &[Vec<geojson::Position>]) -> Vec<Vec<Position>> {
    rings.iter().map(|ring| from_line(ring)).collect()
}

impl TryFrom<&Geometry> for geojson::Value {
    type Error = GeoJsonError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        let coordinates = geometry.raw_coordinates();
        let value = match (geometry.kind(), coordinates) {
            (GeometryType::Circle | GeometryType::Unknown, _) => {
                return Err(GeoJsonError::Unsupported(geometry.kind()));
            }
            (GeometryType::Point, Some(Coordinates::Positions(positions))) => {
                let position = positions.first().ok_or(GeoJsonError::MissingField("coordinates"))?;
                geojson::Value::Point(to_position(position))
            }
            (GeometryType::MultiPoint, Some(Coordinates::Positions(positions))) => {
                geojson::Value::MultiPoint(to_line(positions))
            }
            (GeometryType::LineString, Some(Coordinates::Positions(positions))) => {
                geojson::Value::LineString(to_line(positions))
            }
            (GeometryType::MultiLineString, Some(Coordinates::Rings(rings))) => {
                geojson::Value::MultiLineString(to_rings(rings))
            }
            (GeometryType::Polygon, Some(Coordinates::Rings(rings))) => {
                geojson::Value::Polygon(to_rings(rings))
            }
            (GeometryType::MultiPolygon, Some(Coordinates::Polygons(polygons))) => {
                geojson::Value::MultiPolygon(polygons.iter().map(|rings| to_rings(rings)).collect())
            }
            (GeometryType::GeometryCollection, Some(Coordinates::Children(children))) => {
                let geometries = children
                    .iter()
                    .map(|child| geojson::Value::try_from(child).map(geojson::Geometry::new))
                    .collect::<Result<Vec<_>, _>>()?;
                geojson::Value::GeometryCollection(geometries)
            }
            (GeometryType::GeometryCollection, _) => {
                return Err(GeoJsonError::MissingField("geometries"));
            }
            _ => return Err(GeoJsonError::MissingField("coordinates")),
        };
        Ok(value)
    }
}

impl TryFrom<&Geometry> for geojson::Geometry {
    type Error = GeoJsonError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        geojson::Value::try_from(geometry).map(geojson::Geometry::new)
    }
}

impl From<&geojson::Value> for Geometry {
    fn from(value: &geojson::Value) -> Self {
        let (kind, coordinates) = match value {
            geojson::Value::Point(position) => (
                GeometryType::Point,
                Coordinates::Positions(vec![Position::from_slice(position)]),
            ),
            geojson::Value::MultiPoint(positions) => {
                (GeometryType::MultiPoint, Coordinates::Positions(from_line(positions)))
            }
            geojson::Value::LineString(positions) => {
                (GeometryType::LineString, Coordinates::Positions(from_line(positions)))
            }
            geojson::Value::MultiLineString(lines) => {
                (GeometryType::MultiLineString, Coordinates::Rings(from_rings(lines)))
            }
            geojson::Value::Polygon(rings) => (GeometryType::Polygon, Coordinates::Rings(from_rings(rings))),
            geojson::Value::MultiPolygon(polygons) => (
                GeometryType::MultiPolygon,
                Coordinates::Polygons(polygons.iter().map(|rings| from_rings(rings)).collect()),
            ),
            geojson::Value::GeometryCollection(geometries) => (
                GeometryType::GeometryCollection,
                Coordinates::Children(geometries.iter().map(Geometry::from).collect()),
            ),
        };
        Geometry::from_parts(kind, Some(coordinates), 0.0)
    }
}

impl From<&geojson::Geometry> for Geometry {
    fn from(geometry: &geojson::Geometry) -> Self {
        Geometry::from(&geometry.value)
    }
}
