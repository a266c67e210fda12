use rstar::{AABB, RTree, RTreeObject};

use crate::geojson::FeatureCollection;
use crate::types::{BoundingBox, Position};

/// Bounding box of one feature, remembered by its position in the collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureEnvelope {
    pub index: usize,
    pub bbox: BoundingBox,
}

impl RTreeObject for FeatureEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min.to_array(), self.bbox.max.to_array())
    }
}

/// Spatial lookup over the features of a collection.
///
/// Features without any coordinates have no extent and are left out.
pub struct FeatureIndex {
    tree: RTree<FeatureEnvelope>,
}

impl FeatureIndex {
    pub fn new(collection: &FeatureCollection) -> Self {
        let envelopes = collection
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| {
                feature
                    .geometry
                    .bounding_box()
                    .map(|bbox| FeatureEnvelope { index, bbox })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(envelopes),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Indices of features whose bounding box intersects `bbox`, in ascending order.
    pub fn intersecting(&self, bbox: &BoundingBox) -> Vec<usize> {
        let envelope = AABB::from_corners(bbox.min.to_array(), bbox.max.to_array());
        let mut indices: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.index)
            .collect();
        indices.sort_unstable();
        indices
    }

    /// Indices of features whose bounding box contains `position`, in ascending order.
    pub fn containing(&self, position: &Position) -> Vec<usize> {
        self.intersecting(&BoundingBox::from_position(*position))
    }
}

impl FeatureCollection {
    pub fn spatial_index(&self) -> FeatureIndex {
        FeatureIndex::new(self)
    }
}
