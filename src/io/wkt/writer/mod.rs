//! Serialize [`Geometry`] values to canonical WKT.
//!
//! The writer checks every structural rule the reader enforces, so its output can always be
//! read back into an equal geometry.

mod options;

pub use options::{MultiPointStyle, WriterOptions};

use std::fmt::{self, Write};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WktError};
use crate::geometry::rules::{self, Violation};
use crate::geometry::{
    CircularString, CompoundCurve, Coord, Curve, CurvePolygon, Dimensional, Geometry,
    GeometryCollection, LineString, MultiCurve, MultiLineString, MultiPoint, MultiPolygon,
    MultiSurface, Point, Polygon, PolyhedralSurface, Segment, Surface, Tin, Triangle, Wkt,
};

/// Write a geometry to a new string.
///
/// ```
/// use simple_features_wkt::geometry::{Coord, Point};
/// use simple_features_wkt::io::wkt::write_geometry;
///
/// let point = Point::from_coord(Coord::xy(1., 2.5));
/// assert_eq!(write_geometry(&point.into()).unwrap(), "POINT (1.0 2.5)");
/// ```
pub fn write_geometry(geometry: &Geometry) -> Result<String> {
    let mut writer = WktWriter::new(String::new());
    writer.write_geometry(geometry)?;
    Ok(writer.into_inner())
}

/// Write a geometry with its `SRID=<n>;` prefix, if it has an SRID.
pub fn write_wkt(wkt: &Wkt) -> Result<String> {
    let mut writer = WktWriter::new(String::new());
    writer.write_wkt(wkt)?;
    Ok(writer.into_inner())
}

/// Write a geometry, prefixed with `SRID=<n>;` when `srid` is given.
pub fn write_geometry_with_srid(geometry: &Geometry, srid: Option<i32>) -> Result<String> {
    let mut writer = WktWriter::new(String::new());
    writer.write_srid(srid)?;
    writer.write_geometry(geometry)?;
    Ok(writer.into_inner())
}

/// Tracks how many bytes have gone into the sink, for error positions.
struct Counted<W> {
    inner: W,
    written: usize,
}

impl<W: Write> Write for Counted<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.written += s.len();
        Ok(())
    }
}

/// Streams canonical WKT into any [`fmt::Write`] sink.
///
/// If writing fails, the sink may hold part of the geometry.
pub struct WktWriter<W: Write> {
    out: Counted<W>,
    options: WriterOptions,
    depth: usize,
}

impl<W: Write> WktWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, Default::default())
    }

    pub fn with_options(out: W, options: WriterOptions) -> Self {
        Self {
            out: Counted {
                inner: out,
                written: 0,
            },
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.inner
    }

    pub fn write_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        tracing::trace!(geometry_type = %geometry.geometry_type(), "writing WKT");
        self.depth = 0;
        self.geometry(geometry, geometry.dim())
    }

    pub fn write_wkt(&mut self, wkt: &Wkt) -> Result<()> {
        self.write_srid(wkt.srid)?;
        self.write_geometry(&wkt.geometry)
    }

    fn write_srid(&mut self, srid: Option<i32>) -> Result<()> {
        if let Some(srid) = srid {
            write!(self.out, "SRID={srid};")?;
        }
        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> WktError {
        WktError::InvalidGeometry {
            message: message.into(),
            position: self.out.written,
        }
    }

    fn violation(&self, violation: Violation) -> WktError {
        violation.into_write_error(self.out.written)
    }

    fn check_dim(&self, expected: Dimension, found: Dimension) -> Result<()> {
        if expected != found {
            return Err(self.invalid(format!(
                "expected dimension {expected} but found {found}"
            )));
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            tracing::debug!(limit = self.options.max_depth, "nesting limit exceeded");
            return Err(WktError::NestingTooDeep {
                limit: self.options.max_depth,
                position: self.out.written,
            });
        }
        Ok(())
    }

    /// Write a tagged child: keyword, suffix, then whatever `body` writes.
    fn tagged(
        &mut self,
        geometry_type: GeometryType,
        dim: Dimension,
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        self.enter()?;
        self.header(geometry_type, dim)?;
        body(self)?;
        self.depth -= 1;
        Ok(())
    }

    fn header(&mut self, geometry_type: GeometryType, dim: Dimension) -> Result<()> {
        self.out.write_str(geometry_type.keyword())?;
        if dim != Dimension::XY {
            self.out.write_char(' ')?;
            self.out.write_str(dim.wkt_suffix())?;
        }
        self.out.write_char(' ')?;
        Ok(())
    }

    fn empty(&mut self) -> Result<()> {
        self.out.write_str("EMPTY")?;
        Ok(())
    }

    /// Write `(item, item, ...)`.
    fn list<T>(
        &mut self,
        items: &[T],
        mut item: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        self.out.write_char('(')?;
        for (i, value) in items.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            item(self, value)?;
        }
        self.out.write_char(')')?;
        Ok(())
    }

    fn number(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(self.invalid(format!("non-finite coordinate value {value}")));
        }
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format_finite(value);
        if !text.contains('e') {
            self.out.write_str(text)?;
            return Ok(());
        }

        // ryu switches to exponent notation for very large and very small magnitudes
        let text = value.to_string();
        self.out.write_str(&text)?;
        if !text.contains('.') {
            self.out.write_str(".0")?;
        }
        Ok(())
    }

    fn coord(&mut self, coord: &Coord, dim: Dimension) -> Result<()> {
        self.check_dim(dim, coord.dim())?;
        for (i, value) in coord.values().enumerate() {
            if i > 0 {
                self.out.write_char(' ')?;
            }
            self.number(value)?;
        }
        Ok(())
    }

    fn coords(&mut self, coords: &[Coord], dim: Dimension) -> Result<()> {
        self.list(coords, |writer, coord| writer.coord(coord, dim))
    }

    /// A tagged geometry: keyword, suffix, and body.
    fn geometry(&mut self, geometry: &Geometry, dim: Dimension) -> Result<()> {
        self.check_dim(dim, geometry.dim())?;
        self.tagged(geometry.geometry_type(), dim, |writer| match geometry {
            Geometry::Point(g) => writer.point(g, dim),
            Geometry::LineString(g) => writer.line_string(g, dim),
            Geometry::Polygon(g) => writer.polygon(g, dim),
            Geometry::MultiPoint(g) => writer.multi_point(g, dim),
            Geometry::MultiLineString(g) => writer.multi_line_string(g, dim),
            Geometry::MultiPolygon(g) => writer.multi_polygon(g, dim),
            Geometry::GeometryCollection(g) => writer.geometry_collection(g, dim),
            Geometry::CircularString(g) => writer.circular_string(g, dim),
            Geometry::CompoundCurve(g) => writer.compound_curve(g, dim),
            Geometry::CurvePolygon(g) => writer.curve_polygon(g, dim),
            Geometry::MultiCurve(g) => writer.multi_curve(g, dim),
            Geometry::MultiSurface(g) => writer.multi_surface(g, dim),
            Geometry::PolyhedralSurface(g) => writer.polyhedral_surface(g, dim),
            Geometry::Tin(g) => writer.tin(g, dim),
            Geometry::Triangle(g) => writer.triangle(g, dim),
        })
    }

    // Bodies. Each checks its own dimension against the one its parent requires.

    fn point(&mut self, point: &Point, dim: Dimension) -> Result<()> {
        self.check_dim(dim, point.dim())?;
        match point.coord() {
            None => self.empty(),
            Some(coord) => {
                self.out.write_char('(')?;
                self.coord(coord, dim)?;
                self.out.write_char(')')?;
                Ok(())
            }
        }
    }

    fn line_string(&mut self, line_string: &LineString, dim: Dimension) -> Result<()> {
        self.check_dim(dim, line_string.dim())?;
        if line_string.is_empty() {
            return self.empty();
        }
        rules::check_line_string(line_string.coords()).map_err(|v| self.violation(v))?;
        self.coords(line_string.coords(), dim)
    }

    fn circular_string(&mut self, circular_string: &CircularString, dim: Dimension) -> Result<()> {
        self.check_dim(dim, circular_string.dim())?;
        if circular_string.is_empty() {
            return self.empty();
        }
        rules::check_circular_string(circular_string.coords()).map_err(|v| self.violation(v))?;
        self.coords(circular_string.coords(), dim)
    }

    fn ring(&mut self, ring: &LineString, dim: Dimension) -> Result<()> {
        self.check_dim(dim, ring.dim())?;
        rules::check_ring(ring.coords()).map_err(|v| self.violation(v))?;
        self.coords(ring.coords(), dim)
    }

    fn polygon(&mut self, polygon: &Polygon, dim: Dimension) -> Result<()> {
        self.check_dim(dim, polygon.dim())?;
        if polygon.is_empty() {
            return self.empty();
        }
        self.list(polygon.rings(), |writer, ring| writer.ring(ring, dim))
    }

    fn triangle(&mut self, triangle: &Triangle, dim: Dimension) -> Result<()> {
        self.check_dim(dim, triangle.dim())?;
        if triangle.is_empty() {
            return self.empty();
        }
        rules::check_triangle(triangle.rings()).map_err(|v| self.violation(v))?;
        self.list(triangle.rings(), |writer, ring| writer.ring(ring, dim))
    }

    fn multi_point(&mut self, multi_point: &MultiPoint, dim: Dimension) -> Result<()> {
        self.check_dim(dim, multi_point.dim())?;
        if multi_point.is_empty() {
            return self.empty();
        }
        let style = self.options.multi_point;
        self.list(multi_point.points(), |writer, point| {
            match (style, point.coord()) {
                (MultiPointStyle::Bare, Some(coord)) => {
                    writer.check_dim(dim, point.dim())?;
                    writer.coord(coord, dim)
                }
                _ => writer.point(point, dim),
            }
        })
    }

    fn multi_line_string(&mut self, multi: &MultiLineString, dim: Dimension) -> Result<()> {
        self.check_dim(dim, multi.dim())?;
        if multi.is_empty() {
            return self.empty();
        }
        self.list(multi.curves(), |writer, curve| writer.curve(curve, dim))
    }

    fn multi_polygon(&mut self, multi: &MultiPolygon, dim: Dimension) -> Result<()> {
        self.check_dim(dim, multi.dim())?;
        if multi.is_empty() {
            return self.empty();
        }
        self.list(multi.polygons(), |writer, polygon| writer.polygon(polygon, dim))
    }

    fn segment(&mut self, segment: &Segment, dim: Dimension) -> Result<()> {
        rules::check_segment(segment).map_err(|v| self.violation(v))?;
        match segment {
            Segment::LineString(g) => self.line_string(g, dim),
            Segment::CircularString(g) => {
                self.check_dim(dim, g.dim())?;
                self.tagged(GeometryType::CircularString, dim, |writer| {
                    writer.circular_string(g, dim)
                })
            }
        }
    }

    fn compound_curve(&mut self, curve: &CompoundCurve, dim: Dimension) -> Result<()> {
        self.check_dim(dim, curve.dim())?;
        if curve.is_empty() {
            return self.empty();
        }
        rules::check_continuity(curve.segments()).map_err(|v| self.violation(v))?;
        self.list(curve.segments(), |writer, segment| writer.segment(segment, dim))
    }

    /// Line strings are written bare, other curves tagged.
    fn curve(&mut self, curve: &Curve, dim: Dimension) -> Result<()> {
        match curve {
            Curve::LineString(g) => self.line_string(g, dim),
            Curve::CircularString(g) => {
                self.check_dim(dim, g.dim())?;
                self.tagged(GeometryType::CircularString, dim, |writer| {
                    writer.circular_string(g, dim)
                })
            }
            Curve::CompoundCurve(g) => {
                self.check_dim(dim, g.dim())?;
                self.tagged(GeometryType::CompoundCurve, dim, |writer| {
                    writer.compound_curve(g, dim)
                })
            }
        }
    }

    fn curve_polygon(&mut self, polygon: &CurvePolygon, dim: Dimension) -> Result<()> {
        self.check_dim(dim, polygon.dim())?;
        if polygon.is_empty() {
            return self.empty();
        }
        self.list(polygon.rings(), |writer, ring| writer.curve(ring, dim))
    }

    fn multi_curve(&mut self, multi: &MultiCurve, dim: Dimension) -> Result<()> {
        self.check_dim(dim, multi.dim())?;
        if multi.is_empty() {
            return self.empty();
        }
        self.list(multi.curves(), |writer, curve| writer.curve(curve, dim))
    }

    /// Polygons are written bare, other surfaces tagged.
    fn surface(&mut self, surface: &Surface, dim: Dimension) -> Result<()> {
        if let Surface::Polygon(g) = surface {
            return self.polygon(g, dim);
        }
        self.check_dim(dim, surface.dim())?;
        self.tagged(surface.geometry_type(), dim, |writer| match surface {
            Surface::Polygon(g) => writer.polygon(g, dim),
            Surface::CurvePolygon(g) => writer.curve_polygon(g, dim),
            Surface::PolyhedralSurface(g) => writer.polyhedral_surface(g, dim),
            Surface::Tin(g) => writer.tin(g, dim),
            Surface::Triangle(g) => writer.triangle(g, dim),
        })
    }

    fn multi_surface(&mut self, multi: &MultiSurface, dim: Dimension) -> Result<()> {
        self.check_dim(dim, multi.dim())?;
        if multi.is_empty() {
            return self.empty();
        }
        self.list(multi.surfaces(), |writer, surface| writer.surface(surface, dim))
    }

    fn polyhedral_surface(&mut self, surface: &PolyhedralSurface, dim: Dimension) -> Result<()> {
        self.check_dim(dim, surface.dim())?;
        if surface.is_empty() {
            return self.empty();
        }
        self.list(surface.patches(), |writer, polygon| writer.polygon(polygon, dim))
    }

    fn tin(&mut self, tin: &Tin, dim: Dimension) -> Result<()> {
        self.check_dim(dim, tin.dim())?;
        if tin.is_empty() {
            return self.empty();
        }
        self.list(tin.patches(), |writer, triangle| writer.triangle(triangle, dim))
    }

    fn geometry_collection(&mut self, collection: &GeometryCollection, dim: Dimension) -> Result<()> {
        self.check_dim(dim, collection.dim())?;
        if collection.is_empty() {
            return self.empty();
        }
        self.list(collection.geometries(), |writer, geometry| {
            writer.geometry(geometry, dim)
        })
    }
}
