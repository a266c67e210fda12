mod bbox;
mod geojson_types;
mod number;
mod position;

pub use bbox::*;
pub use geojson_types::*;
pub(crate) use number::NumberLiteral;
pub use position::*;
