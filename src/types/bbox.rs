use super::Position;

/// Axis-aligned extent of a set of positions, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Position,
    pub max: Position,
}

impl BoundingBox {
    pub fn from_position(position: Position) -> Self {
        Self {
            min: position,
            max: position,
        }
    }

    /// `None` when the iterator is empty.
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Option<Self> {
        let mut positions = positions.into_iter();
        let first = positions.next()?;
        let mut bbox = Self::from_position(*first);
        for position in positions {
            bbox.extend(position);
        }
        Some(bbox)
    }

    pub fn extend(&mut self, position: &Position) {
        self.min.longitude = self.min.longitude.min(position.longitude);
        self.min.latitude = self.min.latitude.min(position.latitude);
        self.max.longitude = self.max.longitude.max(position.longitude);
        self.max.latitude = self.max.latitude.max(position.latitude);
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        let mut bbox = *self;
        bbox.extend(&other.min);
        bbox.extend(&other.max);
        bbox
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.max.longitude + self.min.longitude) * 0.5,
            (self.max.latitude + self.min.latitude) * 0.5,
        )
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.longitude >= self.min.longitude
            && position.longitude <= self.max.longitude
            && position.latitude >= self.min.latitude
            && position.latitude <= self.max.latitude
    }
}
