mod index;
mod shape;

pub use index::*;
pub use shape::*;
