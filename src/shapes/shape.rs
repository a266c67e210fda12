use crate::settings::ShapeOptions;
use crate::types::{Geometry, GeometryType, Position};

/// A drawable primitive for a map layer, built from a [`Geometry`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(geo::Point),
    Polyline(geo::LineString),
    /// Exterior plus one interior per hole.
    Polygon(geo::Polygon),
    Circle(CircleShape),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: geo::Point,
    /// Meters
    pub radius: f64,
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Polyline(_) => "polyline",
            Shape::Polygon(_) => "polygon",
            Shape::Circle(_) => "circle",
        }
    }
}

fn line(positions: &[Position], options: &ShapeOptions) -> geo::LineString {
    geo::LineString::new(positions.iter().map(|p| options.coord(p)).collect())
}

/// First ring is the exterior, the rest become holes. No rings, no polygon.
fn polygon(rings: &[Vec<Position>], options: &ShapeOptions) -> Option<geo::Polygon> {
    let (exterior, holes) = rings.split_first()?;
    Some(geo::Polygon::new(
        line(exterior, options),
        holes.iter().map(|hole| line(hole, options)).collect(),
    ))
}

impl Geometry {
    /// Converts the populated coordinates into drawable shapes.
    ///
    /// Points and multi-points give one marker per position, line strings a
    /// single polyline, multi-line strings one polyline per line, polygons one
    /// polygon with its holes, multi-polygons one polygon per non-empty entry,
    /// circles a single circle and collections the shapes of their children
    /// in order. Anything without coordinates yields no shapes.
    pub fn shapes(&self, options: &ShapeOptions) -> Vec<Shape> {
        match self.kind() {
            GeometryType::Point | GeometryType::MultiPoint => self
                .coordinates()
                .unwrap_or_default()
                .iter()
                .map(|p| Shape::Point(options.coord(p).into()))
                .collect(),
            GeometryType::LineString => self
                .coordinates()
                .map(|positions| vec![Shape::Polyline(line(positions, options))])
                .unwrap_or_default(),
            GeometryType::MultiLineString => self
                .ring_coordinates()
                .unwrap_or_default()
                .iter()
                .map(|positions| Shape::Polyline(line(positions, options)))
                .collect(),
            GeometryType::Polygon => self
                .ring_coordinates()
                .and_then(|rings| polygon(rings, options))
                .map(Shape::Polygon)
                .into_iter()
                .collect(),
            GeometryType::MultiPolygon => self
                .polygon_coordinates()
                .unwrap_or_default()
                .iter()
                .filter_map(|rings| polygon(rings, options))
                .map(Shape::Polygon)
                .collect(),
            GeometryType::GeometryCollection => self
                .children()
                .unwrap_or_default()
                .iter()
                .flat_map(|child| child.shapes(options))
                .collect(),
            GeometryType::Circle => self
                .coordinates()
                .and_then(<[Position]>::first)
                .map(|center| {
                    Shape::Circle(CircleShape {
                        center: options.coord(center).into(),
                        radius: self.radius(),
                    })
                })
                .into_iter()
                .collect(),
            GeometryType::Unknown => Vec::new(),
        }
    }
}
