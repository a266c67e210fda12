use tracing::trace;

use crate::types::{Coordinates, Geometry, GeometryType, Position};

impl Geometry {
    /// Returns a new geometry with `position` added, promoting the kind where needed.
    ///
    /// | kind | result |
    /// |---|---|
    /// | `point`, `multiPoint` | `multiPoint`, position appended |
    /// | `lineString` | position appended |
    /// | `multiLineString` | position appended to the last line |
    /// | `polygon` | position inserted just before the closing point of the last ring |
    /// | anything else | an identical copy |
    ///
    /// The receiver is never modified and the result's center is derived
    /// from its own coordinates.
    pub fn append(&self, position: Position) -> Geometry {
        let kind = match self.kind() {
            GeometryType::Point | GeometryType::MultiPoint => GeometryType::MultiPoint,
            GeometryType::LineString => GeometryType::LineString,
            GeometryType::MultiLineString | GeometryType::Polygon => self.kind(),
            GeometryType::Circle
            | GeometryType::Unknown
            | GeometryType::GeometryCollection
            | GeometryType::MultiPolygon => return self.clone(),
        };

        let coordinates = match (self.kind(), self.raw_coordinates().cloned()) {
            (GeometryType::Point | GeometryType::MultiPoint | GeometryType::LineString, coordinates) => {
                let mut positions = match coordinates {
                    Some(Coordinates::Positions(positions)) => positions,
                    _ => Vec::new(),
                };
                positions.push(position);
                Some(Coordinates::Positions(positions))
            }
            (GeometryType::MultiLineString, Some(Coordinates::Rings(mut lines))) => {
                if let Some(last) = lines.last_mut() {
                    last.push(position);
                }
                Some(Coordinates::Rings(lines))
            }
            (GeometryType::Polygon, Some(Coordinates::Rings(mut rings))) => {
                if let Some(last) = rings.last_mut() {
                    // keep the closing point last
                    let index = last.len().saturating_sub(1);
                    last.insert(index, position);
                }
                Some(Coordinates::Rings(rings))
            }
            (_, coordinates) => coordinates,
        };

        trace!("Appended {} to {} geometry, now {}", position, self.kind(), kind);
        Geometry::from_parts(kind, coordinates, self.radius())
    }
}
