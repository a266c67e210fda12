use std::{fs::File, io::{BufReader, Read}, path::Path, str::FromStr};

use serde_json::Value;
use tracing::info;

use crate::error::{GeoJsonError, Result};
use crate::types::Geometry;

use super::FeatureCollection;

impl FeatureCollection {
    /// Parses a feature collection out of any JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<FeatureCollection> {
        let value: Value = serde_json::from_reader(reader)?;
        FeatureCollection::parse(&value)
    }

    /// Opens and parses a `.geojson` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
        let file = File::open(&path)?;
        let collection = FeatureCollection::from_reader(BufReader::new(file))?;
        info!("Loaded {} features from {}", collection.len(), path.as_ref().display());
        Ok(collection)
    }
}

impl FromStr for FeatureCollection {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        FeatureCollection::parse(&value)
    }
}

impl Geometry {
    /// Parses a single geometry object out of any JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Geometry> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(Geometry::parse(&value))
    }
}
