use approx::assert_relative_eq;

use super::*;
use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{Coord, LineString, Point};
use crate::test::{all_geometries, collection};

#[test]
fn round_trip_every_sample() {
    for geometry in all_geometries() {
        let text = write_geometry(&geometry).unwrap();
        let parsed = read_geometry(&text).unwrap();
        assert_eq!(parsed, geometry, "{text}");
    }
}

#[test]
fn round_trip_bare_multi_points() {
    let options = WriterOptions::default().with_multi_point(MultiPointStyle::Bare);
    for geometry in all_geometries() {
        let mut writer = WktWriter::with_options(String::new(), options);
        writer.write_geometry(&geometry).unwrap();
        let text = writer.into_inner();
        assert_eq!(read_geometry(&text).unwrap(), geometry, "{text}");
    }
}

#[test]
fn canonical_form_is_stable() {
    let inputs = [
        "point(1 1)",
        "  LineString Z ( 1 1 1 ,2 2 2 ) ",
        "multipoint (1 2, (3 4), EMPTY)",
        "POLYGONM ((0 0 1, 1 0 2, 1 1 3, 0 0 1))",
        "GEOMETRYCOLLECTION Z (POINT (1 2 3), MULTIPOINT Z EMPTY)",
        "COMPOUNDCURVE (CIRCULARSTRING (0 0, 1 1, 2 0), (2 0, 3 0))",
        "curvepolygon (compoundcurve (circularstring (0 0, 1 1, 2 0), (2 0, 0 0)))",
        "TIN (((0 0, 1 0, 0 1, 0 0)), EMPTY)",
        "POLYHEDRALSURFACE Z (((0 0 0, 1 0 0, 0 1 0, 0 0 0)))",
        "SRID=4326;POINT (1e3 -2.50)",
    ];
    for input in inputs {
        let first = read_wkt(input).unwrap();
        let canonical = write_wkt(&first).unwrap();
        let second = read_wkt(&canonical).unwrap();
        assert_eq!(first, second, "{input}");
        assert_eq!(write_wkt(&second).unwrap(), canonical);
    }
}

#[test]
fn collection_scenario() {
    let text = "GEOMETRYCOLLECTION (POINT (1 1), LINESTRING (0 0, 1 1))";
    let geometry = read_geometry(text).unwrap();
    assert_eq!(geometry.geometry_type(), GeometryType::GeometryCollection);
    assert_eq!(
        write_geometry(&geometry).unwrap(),
        "GEOMETRYCOLLECTION (POINT (1.0 1.0), LINESTRING (0.0 0.0, 1.0 1.0))"
    );
    assert_eq!(
        read_geometry(&write_geometry(&geometry).unwrap()).unwrap(),
        geometry
    );
}

#[test]
fn nested_collections() {
    let geometry: Geometry = collection::nested().into();
    assert_eq!(
        write_geometry(&geometry).unwrap(),
        "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION EMPTY, \
         GEOMETRYCOLLECTION (LINESTRING (3.0 4.0, 5.0 6.0)), LINESTRING EMPTY)"
    );
}

#[test]
fn awkward_numbers_survive() {
    let values = [0.1, -0.0, 1.0 / 3.0, 6.02214076e23, 1.6e-35, f64::MAX, f64::MIN_POSITIVE];
    for value in values {
        let geometry: Geometry = Point::from_coord(Coord::xy(value, -value)).into();
        let text = write_geometry(&geometry).unwrap();
        assert!(!text.contains('e'), "{text}");

        let point = Point::try_from(read_geometry(&text).unwrap()).unwrap();
        let coord = point.coord().unwrap();
        assert_relative_eq!(coord.x, value);
        assert_relative_eq!(coord.y, -value);
    }
}

#[test]
fn display_and_from_str() {
    let geometry: Geometry = "LINESTRING Z (1 1 1, 2 2 2)".parse().unwrap();
    assert_eq!(geometry.dim(), Dimension::XYZ);
    assert_eq!(
        geometry.to_string(),
        "LINESTRING Z (1.0 1.0 1.0, 2.0 2.0 2.0)"
    );

    let wkt: Wkt = "SRID=3857;POINT EMPTY".parse().unwrap();
    assert_eq!(wkt.srid, Some(3857));
    assert_eq!(wkt.to_string(), "SRID=3857;POINT EMPTY");

    assert!("POINT (1)".parse::<Geometry>().is_err());
}

#[test]
fn display_reports_invalid_geometry() {
    use std::fmt::Write;

    let geometry: Geometry = LineString::from(vec![Coord::xy(0., 0.)]).into();
    let mut out = String::new();
    assert!(write!(out, "{geometry}").is_err());
}
