mod append;
mod equality;
mod feature;
mod interop;
mod loader;
mod parse;
mod serialize;

pub use feature::*;
