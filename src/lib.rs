//! Typed GeoJSON geometry model.
//!
//! GeoJSON-shaped JSON is parsed into a [`Geometry`] whose coordinate depth is
//! chosen by its declared type, with a bounding-box center derived once on
//! construction. Geometries serialize back to the exact same shape, compare
//! cheaply with [`Geometry::roughly_eq`], grow with [`Geometry::append`], and
//! convert into `geo` primitives for drawing.

pub mod error;
pub mod geojson;
pub mod settings;
pub mod shapes;
pub mod types;

pub use error::{GeoJsonError, Result};
pub use crate::geojson::{Feature, FeatureCollection};
pub use settings::ShapeOptions;
pub use shapes::{CircleShape, FeatureEnvelope, FeatureIndex, Shape};
pub use types::{
    BoundingBox, CoordinateOrder, Coordinates, DEFAULT_CIRCLE_RADIUS, Geometry, GeometryType, Position,
    normalize_longitude,
};
