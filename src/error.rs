use thiserror::Error;

use crate::types::GeometryType;

#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("cannot take the center of an empty list of positions")]
    EmptyPositions,

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("`{0}` geometries have no GeoJSON counterpart")]
    Unsupported(GeometryType),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeoJsonError>;
