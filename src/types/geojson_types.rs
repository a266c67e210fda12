use tracing::debug;

use super::{BoundingBox, NumberLiteral, Position};

/// Radius given to a `circle` that doesn't declare one: one statute mile, in meters.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 1609.344;

/// The closed set of geometry kinds. `Circle` is a non-standard extension.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Circle,
    #[default]
    Unknown,
}

impl GeometryType {
    pub const ALL: [GeometryType; 9] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
        GeometryType::Circle,
        GeometryType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "point",
            GeometryType::MultiPoint => "multiPoint",
            GeometryType::LineString => "lineString",
            GeometryType::MultiLineString => "multiLineString",
            GeometryType::Polygon => "polygon",
            GeometryType::MultiPolygon => "multiPolygon",
            GeometryType::GeometryCollection => "geometryCollection",
            GeometryType::Circle => "circle",
            GeometryType::Unknown => "unknown",
        }
    }

    /// Case-sensitive lookup, anything unrecognised is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or(GeometryType::Unknown)
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single populated coordinate store of a [`Geometry`].
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates {
    /// `point`, `multiPoint`, `lineString` and the center of a `circle`.
    Positions(Vec<Position>),
    /// `multiLineString` lines, or `polygon` rings (exterior first).
    Rings(Vec<Vec<Position>>),
    /// `multiPolygon`
    Polygons(Vec<Vec<Vec<Position>>>),
    /// `geometryCollection`
    Children(Vec<Geometry>),
}

impl Coordinates {
    /// Bounding-box midpoint derived one nesting level at a time.
    /// Empty lines, rings and polygon entries are passed over; only when
    /// nothing is left is there no center. Collections have no center of
    /// their own.
    fn center(&self) -> crate::Result<Option<Position>> {
        let center = match self {
            Coordinates::Positions(positions) => Position::center(positions)?,
            Coordinates::Rings(rings) => rings_center(rings)?,
            Coordinates::Polygons(polygons) => {
                let polygon_centers: Vec<Position> = polygons
                    .iter()
                    .filter_map(|rings| rings_center(rings).ok())
                    .collect();
                Position::center(&polygon_centers)?
            }
            Coordinates::Children(_) => return Ok(None),
        };
        Ok(Some(center))
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Coordinates::Positions(positions) => BoundingBox::from_positions(positions),
            Coordinates::Rings(rings) => BoundingBox::from_positions(rings.iter().flatten()),
            Coordinates::Polygons(polygons) => {
                BoundingBox::from_positions(polygons.iter().flatten().flatten())
            }
            Coordinates::Children(children) => children
                .iter()
                .filter_map(Geometry::bounding_box)
                .reduce(|a, b| a.union(&b)),
        }
    }
}

fn rings_center(rings: &[Vec<Position>]) -> crate::Result<Position> {
    let centers: Vec<Position> = rings
        .iter()
        .filter_map(|ring| Position::center(ring).ok())
        .collect();
    Position::center(&centers)
}

/// A parsed GeoJSON geometry.
///
/// Holds at most one populated [`Coordinates`] store; which one depends on
/// `kind`. The center is derived once when the value is built and never
/// touched afterwards, so a `Geometry` is effectively an immutable value.
/// Operations such as [`Geometry::append`] hand back a fresh instance.
#[derive(Debug, Clone)]
pub struct Geometry {
    kind: GeometryType,
    coordinates: Option<Coordinates>,
    radius: f64,
    radius_literal: NumberLiteral,
    center: Option<Position>,
}

impl Geometry {
    /// Assembles a geometry and derives its center.
    pub(crate) fn from_parts(kind: GeometryType, coordinates: Option<Coordinates>, radius: f64) -> Self {
        let center = match coordinates.as_ref().map(Coordinates::center).transpose() {
            Ok(center) => center.flatten(),
            Err(err) => {
                debug!("No center for {} geometry: {}", kind, err);
                None
            }
        };
        Self {
            kind,
            coordinates,
            radius,
            radius_literal: NumberLiteral::Float,
            center,
        }
    }

    pub(crate) fn with_radius_literal(mut self, literal: NumberLiteral) -> Self {
        self.radius_literal = literal;
        self
    }

    pub(crate) fn radius_literal(&self) -> NumberLiteral {
        self.radius_literal
    }

    pub fn unknown() -> Self {
        Self::from_parts(GeometryType::Unknown, None, 0.0)
    }

    pub fn kind(&self) -> GeometryType {
        self.kind
    }

    /// Meters. Only meaningful for `circle`; zero for every other kind.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The center computed at construction. `None` for collections, unknown
    /// geometries, and anything whose coordinates were missing or empty.
    pub fn center(&self) -> Option<Position> {
        self.center
    }

    pub fn raw_coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    pub fn coordinates(&self) -> Option<&[Position]> {
        match &self.coordinates {
            Some(Coordinates::Positions(positions)) => Some(positions),
            _ => None,
        }
    }

    pub fn ring_coordinates(&self) -> Option<&[Vec<Position>]> {
        match &self.coordinates {
            Some(Coordinates::Rings(rings)) => Some(rings),
            _ => None,
        }
    }

    pub fn polygon_coordinates(&self) -> Option<&[Vec<Vec<Position>>]> {
        match &self.coordinates {
            Some(Coordinates::Polygons(polygons)) => Some(polygons),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Geometry]> {
        match &self.coordinates {
            Some(Coordinates::Children(children)) => Some(children),
            _ => None,
        }
    }

    /// Extent of every position in the geometry, children included.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.coordinates.as_ref().and_then(Coordinates::bounding_box)
    }

    /// Like [`Geometry::center`], but a collection combines the centers of
    /// its children instead of reporting none.
    pub fn aggregate_center(&self) -> Option<Position> {
        match self.children() {
            Some(children) => {
                let centers: Vec<Position> = children
                    .iter()
                    .filter_map(Geometry::aggregate_center)
                    .collect();
                Position::center(&centers).ok()
            }
            None => self.center,
        }
    }
}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.coordinates == other.coordinates
            && self.radius == other.radius
            && self.center == other.center
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::unknown()
    }
}
