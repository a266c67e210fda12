use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{GeoJsonError, Result};
use crate::types::Geometry;

/// A geometry plus its free-form property bag.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    /// `None` unless both `geometry` and `properties` are JSON objects.
    pub fn parse(value: &Value) -> Option<Feature> {
        let geometry = value.get("geometry").filter(|g| g.is_object())?;
        let properties = value.get("properties").and_then(Value::as_object)?;
        Some(Feature {
            geometry: Geometry::parse(geometry),
            properties: properties.clone(),
        })
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from("Feature"));
        map.insert("geometry".to_string(), self.geometry.to_value());
        map.insert("properties".to_string(), Value::Object(self.properties.clone()));
        Value::Object(map)
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Reads the `features` array, skipping entries that aren't valid features.
    ///
    /// # Errors
    ///
    /// [`GeoJsonError::NotAnObject`] for non-object input and
    /// [`GeoJsonError::MissingField`] when there is no `features` array.
    pub fn parse(value: &Value) -> Result<FeatureCollection> {
        let object = value.as_object().ok_or(GeoJsonError::NotAnObject)?;
        let entries = object
            .get("features")
            .and_then(Value::as_array)
            .ok_or(GeoJsonError::MissingField("features"))?;

        let features: Vec<Feature> = entries.iter().filter_map(Feature::parse).collect();
        if features.len() != entries.len() {
            debug!(
                "Skipped {} invalid features out of {}",
                entries.len() - features.len(),
                entries.len()
            );
        }
        Ok(FeatureCollection { features })
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from("FeatureCollection"));
        map.insert(
            "features".to_string(),
            Value::Array(self.features.iter().map(Feature::to_value).collect()),
        );
        Value::Object(map)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Feature::parse(&value)
            .ok_or_else(|| serde::de::Error::custom("feature needs object `geometry` and `properties`"))
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        FeatureCollection::parse(&value).map_err(serde::de::Error::custom)
    }
}
