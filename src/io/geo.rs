//! Convert to and from [`geo`] geometries.
//!
//! `geo` is two-dimensional and has no curves or empty points, so conversion to `geo` keeps
//! only X and Y and fails for curved and empty-point geometries.

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WktError};
use crate::geometry::{
    Coord, Curve, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, PolyhedralSurface, Tin, Triangle,
};

fn not_convertible(found: GeometryType, expected: &'static str) -> WktError {
    WktError::IncorrectGeometryType {
        expected: expected.into(),
        found,
        position: 0,
    }
}

/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`]. Fails for an empty point.
pub fn point_to_geo(point: &Point) -> Result<geo::Point> {
    point
        .coord()
        .map(|coord| geo::Point(coord_to_geo(coord)))
        .ok_or_else(|| not_convertible(GeometryType::Point, "a non-empty POINT"))
}

pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`]. An empty polygon has an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint> {
    let points = multi_point
        .points()
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPoint::new(points))
}

/// Convert a MultiLineString to a [`geo::MultiLineString`]. Fails if any member is curved.
pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> Result<geo::MultiLineString> {
    let line_strings = multi_line_string
        .curves()
        .iter()
        .map(|curve| match curve {
            Curve::LineString(line_string) => Ok(line_string_to_geo(line_string)),
            other => Err(not_convertible(other.geometry_type(), "a LINESTRING member")),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(line_strings))
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a non-empty Triangle to a [`geo::Triangle`] made of its first three vertices.
pub fn triangle_to_geo(triangle: &Triangle) -> Result<geo::Triangle> {
    match triangle.exterior().map(LineString::coords) {
        Some([a, b, c, ..]) => Ok(geo::Triangle::new(
            coord_to_geo(a),
            coord_to_geo(b),
            coord_to_geo(c),
        )),
        _ => Err(not_convertible(
            GeometryType::Triangle,
            "a non-empty TRIANGLE",
        )),
    }
}

/// A polyhedral surface becomes a [`geo::MultiPolygon`] of its patches.
pub fn polyhedral_surface_to_geo(surface: &PolyhedralSurface) -> geo::MultiPolygon {
    geo::MultiPolygon::new(surface.patches().iter().map(polygon_to_geo).collect())
}

/// A TIN becomes a [`geo::MultiPolygon`] of its triangles.
pub fn tin_to_geo(tin: &Tin) -> geo::MultiPolygon {
    let polygons = tin
        .patches()
        .iter()
        .map(|triangle| {
            let exterior = triangle
                .exterior()
                .map(line_string_to_geo)
                .unwrap_or_else(|| geo::LineString::new(vec![]));
            geo::Polygon::new(exterior, vec![])
        })
        .collect();
    geo::MultiPolygon::new(polygons)
}

pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo::GeometryCollection> {
    let geometries = geometry_collection
        .geometries()
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::GeometryCollection(geometries))
}

/// Convert any linear Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry> {
    let geom = match geometry {
        Geometry::Point(g) => point_to_geo(g)?.into(),
        Geometry::LineString(g) => line_string_to_geo(g).into(),
        Geometry::Polygon(g) => polygon_to_geo(g).into(),
        Geometry::MultiPoint(g) => multi_point_to_geo(g)?.into(),
        Geometry::MultiLineString(g) => multi_line_string_to_geo(g)?.into(),
        Geometry::MultiPolygon(g) => multi_polygon_to_geo(g).into(),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g)?)
        }
        Geometry::Triangle(g) => triangle_to_geo(g)?.into(),
        Geometry::PolyhedralSurface(g) => polyhedral_surface_to_geo(g).into(),
        Geometry::Tin(g) => tin_to_geo(g).into(),
        Geometry::CircularString(_)
        | Geometry::CompoundCurve(_)
        | Geometry::CurvePolygon(_)
        | Geometry::MultiCurve(_)
        | Geometry::MultiSurface(_) => {
            return Err(not_convertible(
                geometry.geometry_type(),
                "a geometry without curves",
            ))
        }
    };
    Ok(geom)
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = WktError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}

fn coord_from_geo(coord: &geo::Coord) -> Coord {
    Coord::xy(coord.x, coord.y)
}

fn line_string_from_geo(line_string: &geo::LineString) -> LineString {
    LineString::new(
        Dimension::XY,
        line_string.coords().map(coord_from_geo).collect(),
    )
}

fn polygon_from_geo(polygon: &geo::Polygon) -> Polygon {
    if polygon.exterior().0.is_empty() {
        return Polygon::empty(Dimension::XY);
    }
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_string_from_geo)
        .collect();
    Polygon::new(Dimension::XY, rings)
}

impl From<&geo::Geometry> for Geometry {
    /// `Line` becomes a LineString and `Rect` a Polygon.
    fn from(value: &geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from_coord(coord_from_geo(&g.0)).into(),
            geo::Geometry::Line(g) => LineString::new(
                Dimension::XY,
                vec![coord_from_geo(&g.start), coord_from_geo(&g.end)],
            )
            .into(),
            geo::Geometry::LineString(g) => line_string_from_geo(g).into(),
            geo::Geometry::Polygon(g) => polygon_from_geo(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::new(
                Dimension::XY,
                g.iter()
                    .map(|point| Point::from_coord(coord_from_geo(&point.0)))
                    .collect(),
            )
            .into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::new(
                Dimension::XY,
                g.iter()
                    .map(|line_string| Curve::from(line_string_from_geo(line_string)))
                    .collect(),
            )
            .into(),
            geo::Geometry::MultiPolygon(g) => {
                MultiPolygon::new(Dimension::XY, g.iter().map(polygon_from_geo).collect()).into()
            }
            geo::Geometry::GeometryCollection(g) => {
                GeometryCollection::new(Dimension::XY, g.iter().map(Geometry::from).collect())
                    .into()
            }
            geo::Geometry::Rect(g) => polygon_from_geo(&g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => {
                let [a, b, c] = g.to_array();
                let ring = vec![a, b, c, a].iter().map(coord_from_geo).collect();
                Triangle::new(Dimension::XY, vec![LineString::new(Dimension::XY, ring)]).into()
            }
        }
    }
}
