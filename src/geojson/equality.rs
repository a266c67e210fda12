use crate::types::{Coordinates, Geometry, GeometryType, Position};

impl Geometry {
    /// Cheap structural comparison, not value equality.
    ///
    /// Geometries of different kinds never match. When both sides hold the
    /// same coordinate store, only the nested lengths are compared; the
    /// coordinate values themselves are never looked at. A match then needs
    /// both centers to be present and identical, and circles never match.
    ///
    /// Two shapes with the same lengths and the same center but different
    /// coordinates are reported equal. Collections have no center and so
    /// never compare equal either. Use `==` for an exact comparison.
    pub fn roughly_eq(&self, other: &Geometry) -> bool {
        if self.kind() != other.kind() {
            return false;
        }

        if let (Some(lhs), Some(rhs)) = (self.raw_coordinates(), other.raw_coordinates()) {
            if !same_lengths(lhs, rhs) {
                return false;
            }
        }

        match (self.center(), other.center()) {
            (Some(lhs), Some(rhs)) => self.kind() != GeometryType::Circle && lhs == rhs,
            _ => false,
        }
    }
}

/// `true` unless both stores are the same variant and differ in length at some level.
fn same_lengths(lhs: &Coordinates, rhs: &Coordinates) -> bool {
    match (lhs, rhs) {
        (Coordinates::Positions(a), Coordinates::Positions(b)) => a.len() == b.len(),
        (Coordinates::Rings(a), Coordinates::Rings(b)) => rings_match(a, b),
        (Coordinates::Polygons(a), Coordinates::Polygons(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| rings_match(a, b))
        }
        (Coordinates::Children(a), Coordinates::Children(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(a, b)| match (a.raw_coordinates(), b.raw_coordinates()) {
                    (Some(a), Some(b)) => same_lengths(a, b),
                    _ => true,
                })
        }
        _ => true,
    }
}

fn rings_match(a: &[Vec<Position>], b: &[Vec<Position>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.len() == b.len())
}
