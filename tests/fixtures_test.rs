// Parses the GeoJSON fixtures in tests/data and checks what each kind produces.
use geojson_model::{FeatureCollection, Geometry, GeometryType, Position, Shape, ShapeOptions};
use serde_json::Value;

fn load(name: &str) -> Value {
    let path = format!("tests/data/{}.geojson", name);
    let data = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&data).expect("Fixture is not valid JSON")
}

#[test]
fn test_point_allocation() {
    let geometry = Geometry::parse(&load("point"));

    assert_eq!(geometry.kind(), GeometryType::Point);
    assert!(geometry.coordinates().is_some());
    assert!(geometry.ring_coordinates().is_none());
    assert!(geometry.polygon_coordinates().is_none());

    let first = geometry.coordinates().unwrap()[0];
    assert_eq!(first.longitude, -105.01621);
    assert_eq!(first.latitude, 39.57422);

    match geometry.shapes(&ShapeOptions::default()).first() {
        Some(Shape::Point(point)) => {
            assert_eq!(point.x(), first.longitude);
            assert_eq!(point.y(), first.latitude);
        }
        other => panic!("First shape has incorrect type: {:?}", other),
    }
}

#[test]
fn test_multi_point_allocation() {
    let geometry = Geometry::parse(&load("multi_point"));

    assert_eq!(geometry.kind(), GeometryType::MultiPoint);
    let coordinates = geometry.coordinates().unwrap();
    assert_eq!(coordinates.len(), 2);
    assert_eq!(coordinates[1], Position::new(-80.6665134, 35.0539943));

    let shapes = geometry.shapes(&ShapeOptions::default());
    assert_eq!(shapes.len(), 2);
    assert!(shapes.iter().all(|shape| matches!(shape, Shape::Point(_))));
}

#[test]
fn test_line_string_allocation() {
    let geometry = Geometry::parse(&load("line_string"));

    assert_eq!(geometry.kind(), GeometryType::LineString);
    let coordinates = geometry.coordinates().unwrap();
    assert_eq!(coordinates.len(), 26);
    assert_eq!(coordinates[0], Position::new(-101.744384765625, 39.32155002466662));
    assert_eq!(coordinates[25], Position::new(-97.635498046875, 38.87392853923629));

    match geometry.shapes(&ShapeOptions::default()).as_slice() {
        [Shape::Polyline(line)] => assert_eq!(line.0.len(), 26),
        other => panic!("Expected one polyline, got {:?}", other),
    }
}

#[test]
fn test_multi_line_string_allocation() {
    let geometry = Geometry::parse(&load("multi_line_string"));

    assert_eq!(geometry.kind(), GeometryType::MultiLineString);
    let lines = geometry.ring_coordinates().unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].len(), 6);
    assert_eq!(lines[0][0], Position::new(-105.0214433670044, 39.57805759162015));

    let shapes = geometry.shapes(&ShapeOptions::default());
    assert_eq!(shapes.len(), 4);
    match &shapes[0] {
        Shape::Polyline(line) => assert_eq!(line.0.len(), 6),
        other => panic!("First shape has incorrect type: {:?}", other),
    }
}

#[test]
fn test_polygon_allocation() {
    let geometry = Geometry::parse(&load("polygon"));

    assert_eq!(geometry.kind(), GeometryType::Polygon);
    let rings = geometry.ring_coordinates().unwrap();
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0].len(), 176);
    assert_eq!(rings[0][0], Position::new(-84.32281494140625, 34.9895035675793));

    let shapes = geometry.shapes(&ShapeOptions::default());
    assert_eq!(shapes.len(), 1);
    match &shapes[0] {
        Shape::Polygon(polygon) => {
            assert_eq!(polygon.interiors().len(), 1);
            assert_eq!(polygon.exterior().0.len(), 176);
        }
        other => panic!("First shape has incorrect type: {:?}", other),
    }
}

#[test]
fn test_multi_polygon_allocation() {
    let geometry = Geometry::parse(&load("multi_polygon"));

    assert_eq!(geometry.kind(), GeometryType::MultiPolygon);
    let polygons = geometry.polygon_coordinates().unwrap();
    assert_eq!(polygons.len(), 2);
    assert_eq!(polygons[0].len(), 2);
    assert_eq!(polygons[0][0].len(), 176);
    assert_eq!(polygons[0][0][0], Position::new(-84.32281494140625, 34.9895035675793));

    let shapes = geometry.shapes(&ShapeOptions::default());
    assert_eq!(shapes.len(), 2);
    for shape in &shapes {
        match shape {
            Shape::Polygon(polygon) => assert_eq!(polygon.interiors().len(), 1),
            other => panic!("Shape has incorrect type: {:?}", other),
        }
    }
}

#[test]
fn test_fixtures_serialize_back_unchanged() {
    for name in ["point", "multi_point", "line_string", "multi_line_string", "polygon", "multi_polygon"] {
        let value = load(name);
        let geometry = Geometry::parse(&value);
        assert_eq!(geometry.to_value(), value, "{} did not round-trip", name);
        assert_eq!(Geometry::parse(&geometry.to_value()), geometry);
    }
}

#[test]
fn test_append_to_fixture_polygon() {
    let polygon = Geometry::parse(&load("polygon"));
    let position = Position::new(-83.5, 34.5);
    let appended = polygon.append(position);

    let before = polygon.ring_coordinates().unwrap().last().unwrap();
    let after = appended.ring_coordinates().unwrap().last().unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), before.last());
    assert_eq!(after[after.len() - 2], position);
    // exterior ring untouched
    assert_eq!(appended.ring_coordinates().unwrap()[0].len(), 176);
}

#[test]
fn test_feature_collection_from_file() {
    let collection = FeatureCollection::from_path("tests/data/feature_collection.geojson")
        .expect("Failed to load feature collection");
    assert_eq!(collection.len(), 4);

    let kinds: Vec<GeometryType> = collection.iter().map(|f| f.geometry.kind()).collect();
    assert_eq!(
        kinds,
        [GeometryType::Point, GeometryType::LineString, GeometryType::Circle, GeometryType::Polygon]
    );
    assert_eq!(collection.features[0].properties["name"], "Bike rack");
    assert_eq!(collection.features[2].geometry.radius(), 500.0);

    assert_eq!(collection.to_value(), load("feature_collection"));

    let index = collection.spatial_index();
    assert_eq!(index.len(), 4);
    assert_eq!(index.containing(&Position::new(-0.1276, 51.5072)), vec![2]);
}
