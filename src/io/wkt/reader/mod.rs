//! Parse WKT text into [`Geometry`] values.

mod options;
pub mod tokenizer;
pub mod type_info;

pub use options::{GeometryFilter, ReaderOptions, DEFAULT_MAX_DEPTH};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use type_info::GeometryTypeInfo;

use std::borrow::Cow;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WktError};
use crate::geometry::rules::{self, Violation};
use crate::geometry::{
    CircularString, CompoundCurve, Coord, Curve, CurvePolygon, Geometry, GeometryCollection,
    LineString, MultiCurve, MultiLineString, MultiPoint, MultiPolygon, MultiSurface, Point,
    Polygon, PolyhedralSurface, Segment, Surface, Tin, Triangle, TypedGeometry, Wkt,
};

/// Parse a geometry, ignoring any `SRID=<n>;` prefix.
pub fn read_geometry(text: &str) -> Result<Geometry> {
    Ok(read_wkt(text)?.geometry)
}

/// Parse a geometry together with its optional `SRID=<n>;` prefix.
pub fn read_wkt(text: &str) -> Result<Wkt> {
    WktReader::new(text).read_root(None)
}

/// Parse a geometry that must be of type `T`.
///
/// ```
/// use simple_features_wkt::geometry::LineString;
/// use simple_features_wkt::io::wkt::read_geometry_as;
///
/// let line: LineString = read_geometry_as("LINESTRING (0 0, 1 1)").unwrap();
/// assert_eq!(line.len(), 2);
/// assert!(read_geometry_as::<LineString>("POINT (0 0)").is_err());
/// ```
pub fn read_geometry_as<T: TypedGeometry>(text: &str) -> Result<T> {
    let wkt = WktReader::new(text).read_expected(T::GEOMETRY_TYPE)?;
    T::try_from(wkt.geometry)
}

/// Parse only the leading keyword and dimension suffix of a geometry.
pub fn read_geometry_type(text: &str) -> Result<GeometryTypeInfo> {
    WktReader::new(text).read_geometry_type()
}

/// Parse a geometry, keeping only what `filter` accepts.
///
/// Returns `Ok(None)` if the root geometry itself is rejected.
pub fn read_filtered(text: &str, filter: &dyn GeometryFilter) -> Result<Option<Wkt>> {
    WktReader::new(text).with_filter(filter).read()
}

/// A recursive-descent parser over a single WKT string.
///
/// Every read starts again from the beginning of the input, so a reader can be reused.
pub struct WktReader<'a> {
    tokens: Tokenizer<'a>,
    peeked: Option<Token<'a>>,
    options: ReaderOptions,
    filter: Option<&'a dyn GeometryFilter>,
    depth: usize,
}

impl<'a> WktReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, Default::default())
    }

    pub fn with_options(text: &'a str, options: ReaderOptions) -> Self {
        Self {
            tokens: Tokenizer::new(text),
            peeked: None,
            options,
            filter: None,
            depth: 0,
        }
    }

    pub fn with_filter(self, filter: &'a dyn GeometryFilter) -> Self {
        Self {
            filter: Some(filter),
            ..self
        }
    }

    /// Parse the whole input.
    ///
    /// Returns `Ok(None)` only when a filter is set and it rejects the root geometry.
    pub fn read(&mut self) -> Result<Option<Wkt>> {
        let wkt = self.read_root(None)?;
        let accepted = self.accept(None, &wkt.geometry);
        Ok(accepted.then_some(wkt))
    }

    /// Parse the whole input, which must hold a geometry of type `expected`.
    pub fn read_expected(&mut self, expected: GeometryType) -> Result<Wkt> {
        self.read_root(Some(expected))
    }

    /// Parse only the type keyword, after any SRID prefix.
    pub fn read_geometry_type(&mut self) -> Result<GeometryTypeInfo> {
        self.start()?;
        let (info, _) = self.read_type_info()?;
        Ok(info)
    }

    fn start(&mut self) -> Result<Option<i32>> {
        let text = self.tokens.input();
        tracing::trace!(len = text.len(), "reading WKT");
        let (srid, offset) = split_srid(text)?;
        self.tokens = Tokenizer::new_at(text, offset);
        self.peeked = None;
        self.depth = 0;
        Ok(srid)
    }

    fn read_root(&mut self, expected: Option<GeometryType>) -> Result<Wkt> {
        let srid = self.start()?;
        let (info, position) = self.read_type_info()?;
        if let Some(expected) = expected {
            if expected != info.geometry_type {
                return Err(WktError::IncorrectGeometryType {
                    expected: expected.keyword().into(),
                    found: info.geometry_type,
                    position,
                });
            }
        }

        self.enter(position)?;
        let geometry = self.read_body(info.geometry_type, info.dim)?;
        self.leave();
        self.finish()?;

        Ok(Wkt { srid, geometry })
    }

    /// Fails if anything other than whitespace follows the geometry.
    fn finish(&mut self) -> Result<()> {
        if let Some(token) = self.peeked {
            return Err(WktError::TrailingContent {
                position: token.position,
            });
        }
        let text = self.tokens.input();
        let rest = &text[self.tokens.position()..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            Ok(())
        } else {
            Err(WktError::TrailingContent {
                position: text.len() - trimmed.len(),
            })
        }
    }

    fn accept(&self, containing_type: Option<GeometryType>, geometry: &Geometry) -> bool {
        self.filter
            .map_or(true, |filter| filter.filter(containing_type, geometry))
    }

    /// Drop the children of a `containing_type` geometry that the filter rejects.
    fn keep<T>(&self, containing_type: GeometryType, children: Vec<T>) -> Vec<T>
    where
        T: Clone + Into<Geometry>,
    {
        let Some(filter) = self.filter else {
            return children;
        };
        children
            .into_iter()
            .filter(|child| filter.filter(Some(containing_type), &child.clone().into()))
            .collect()
    }

    /// Drop the coordinates of a `containing_type` geometry whose point the filter rejects.
    fn keep_coords(&self, containing_type: GeometryType, coords: Vec<Coord>) -> Vec<Coord> {
        let Some(filter) = self.filter else {
            return coords;
        };
        coords
            .into_iter()
            .filter(|coord| {
                let point = Point::from_coord(*coord);
                filter.filter(Some(containing_type), &point.into())
            })
            .collect()
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            tracing::debug!(limit = self.options.max_depth, position, "nesting limit exceeded");
            return Err(WktError::NestingTooDeep {
                limit: self.options.max_depth,
                position,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // Token handling

    fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        if let Some(token) = self.peeked.take() {
            return Ok(Some(token));
        }
        self.tokens.next().transpose()
    }

    fn peek_token(&mut self) -> Result<Option<Token<'a>>> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next().transpose()?;
        }
        Ok(self.peeked)
    }

    fn peek_is(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.peek_token()?.is_some_and(|token| token.is(kind)))
    }

    /// Position of the next token, or the end of the input.
    fn peek_position(&mut self) -> Result<usize> {
        Ok(match self.peek_token()? {
            Some(token) => token.position,
            None => self.tokens.input().len(),
        })
    }

    fn unexpected(&self, expected: impl Into<Cow<'static, str>>, found: Option<Token>) -> WktError {
        let (found, position) = match found {
            Some(token) => (token.to_string(), token.position),
            None => ("end of input".to_string(), self.tokens.input().len()),
        };
        WktError::UnexpectedToken {
            expected: expected.into(),
            found,
            position,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'a>> {
        match self.next_token()? {
            Some(token) if token.is(kind) => Ok(token),
            other => Err(self.unexpected(expected, other)),
        }
    }

    /// Consume `EMPTY` if it comes next.
    fn read_empty(&mut self) -> Result<bool> {
        if self.peek_is(TokenKind::Empty)? {
            self.peeked = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parse `'(' item (',' item)* ')'`.
    fn read_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        self.expect(TokenKind::LeftParen, "'('")?;
        let mut items = vec![item(self)?];
        loop {
            match self.next_token()? {
                Some(token) if token.is(TokenKind::Comma) => items.push(item(self)?),
                Some(token) if token.is(TokenKind::RightParen) => return Ok(items),
                other => return Err(self.unexpected("',' or ')'", other)),
            }
        }
    }

    // Keywords

    fn read_type_info(&mut self) -> Result<(GeometryTypeInfo, usize)> {
        let token = match self.next_token()? {
            Some(token) if token.is(TokenKind::Word) => token,
            other => return Err(self.unexpected("geometry type", other)),
        };
        let mut info = type_info::resolve(token.text, token.position)?;
        if let Some(next) = self.peek_token()? {
            if next.is(TokenKind::Word) {
                if let Some(with_suffix) = type_info::resolve_suffix(info, next.text) {
                    self.peeked = None;
                    info = with_suffix;
                }
            }
        }
        Ok((info, token.position))
    }

    /// Read the keyword of a nested geometry, which inherits `parent_dim` unless it states
    /// its own. A stated dimension must agree with the parent.
    fn read_child_type(&mut self, parent_dim: Dimension) -> Result<(GeometryType, usize)> {
        let (info, position) = self.read_type_info()?;
        if info.explicit_dim && info.dim != parent_dim {
            return Err(WktError::DimensionMismatch {
                expected: parent_dim,
                found: info.dim,
                position,
            });
        }
        Ok((info.geometry_type, position))
    }

    // Coordinates

    fn read_number(&mut self) -> Result<Option<(f64, usize)>> {
        if !self.peek_is(TokenKind::Number)? {
            return Ok(None);
        }
        let Some(token) = self.peeked.take() else {
            return Ok(None);
        };
        let number_error = || WktError::NumberFormat {
            text: token.text.to_string(),
            position: token.position,
        };
        let value = lexical_core::parse::<f64>(token.text.as_bytes()).map_err(|_| number_error())?;
        if !value.is_finite() {
            return Err(number_error());
        }
        Ok(Some((value, token.position)))
    }

    fn read_coord(&mut self, dim: Dimension) -> Result<Coord> {
        let mut values = [0.0; 4];
        let mut count = 0;
        let mut start = None;
        while let Some((value, position)) = self.read_number()? {
            start.get_or_insert(position);
            if let Some(slot) = values.get_mut(count) {
                *slot = value;
            }
            count += 1;
        }

        let Some(position) = start else {
            let found = self.next_token()?;
            return Err(self.unexpected("coordinate", found));
        };
        let arity_error = WktError::CoordinateArity {
            dimension: dim,
            found: count,
            position,
        };
        if count > values.len() {
            return Err(arity_error);
        }
        Coord::from_slice(dim, &values[..count]).ok_or(arity_error)
    }

    fn read_coords(&mut self, dim: Dimension) -> Result<Vec<Coord>> {
        self.read_list(|reader| reader.read_coord(dim))
    }

    // Bodies

    fn read_body(&mut self, geometry_type: GeometryType, dim: Dimension) -> Result<Geometry> {
        let geometry = match geometry_type {
            GeometryType::Point => self.read_point(dim)?.into(),
            GeometryType::LineString => self.read_line_string(dim)?.into(),
            GeometryType::Polygon => self.read_polygon(dim)?.into(),
            GeometryType::MultiPoint => self.read_multi_point(dim)?.into(),
            GeometryType::MultiLineString => self.read_multi_line_string(dim)?.into(),
            GeometryType::MultiPolygon => self.read_multi_polygon(dim)?.into(),
            GeometryType::GeometryCollection => self.read_geometry_collection(dim)?.into(),
            GeometryType::CircularString => self.read_circular_string(dim)?.into(),
            GeometryType::CompoundCurve => self.read_compound_curve(dim)?.into(),
            GeometryType::CurvePolygon => self.read_curve_polygon(dim)?.into(),
            GeometryType::MultiCurve => self.read_multi_curve(dim)?.into(),
            GeometryType::MultiSurface => self.read_multi_surface(dim)?.into(),
            GeometryType::PolyhedralSurface => self.read_polyhedral_surface(dim)?.into(),
            GeometryType::Tin => self.read_tin(dim)?.into(),
            GeometryType::Triangle => self.read_triangle(dim)?.into(),
        };
        Ok(geometry)
    }

    fn read_point(&mut self, dim: Dimension) -> Result<Point> {
        if self.read_empty()? {
            return Ok(Point::empty(dim));
        }
        self.expect(TokenKind::LeftParen, "'(' or EMPTY")?;
        let coord = self.read_coord(dim)?;
        self.expect(TokenKind::RightParen, "')'")?;
        Ok(Point::new(dim, Some(coord)))
    }

    fn read_line_string(&mut self, dim: Dimension) -> Result<LineString> {
        if self.read_empty()? {
            return Ok(LineString::empty(dim));
        }
        let position = self.peek_position()?;
        let coords = self.read_coords(dim)?;
        rules::check_line_string(&coords).map_err(|v| v.into_read_error(position))?;
        let coords = self.keep_coords(GeometryType::LineString, coords);
        Ok(LineString::new(dim, coords))
    }

    fn read_circular_string(&mut self, dim: Dimension) -> Result<CircularString> {
        if self.read_empty()? {
            return Ok(CircularString::empty(dim));
        }
        let position = self.peek_position()?;
        let coords = self.read_coords(dim)?;
        rules::check_circular_string(&coords).map_err(|v| v.into_read_error(position))?;
        let coords = self.keep_coords(GeometryType::CircularString, coords);
        Ok(CircularString::new(dim, coords))
    }

    fn read_ring(&mut self, dim: Dimension) -> Result<LineString> {
        let position = self.peek_position()?;
        let coords = self.read_coords(dim)?;
        rules::check_ring(&coords).map_err(|v| v.into_read_error(position))?;
        let coords = self.keep_coords(GeometryType::LineString, coords);
        Ok(LineString::new(dim, coords))
    }

    fn read_polygon(&mut self, dim: Dimension) -> Result<Polygon> {
        if self.read_empty()? {
            return Ok(Polygon::empty(dim));
        }
        let rings = self.read_list(|reader| reader.read_ring(dim))?;
        Ok(Polygon::new(dim, self.keep(GeometryType::Polygon, rings)))
    }

    fn read_triangle(&mut self, dim: Dimension) -> Result<Triangle> {
        if self.read_empty()? {
            return Ok(Triangle::empty(dim));
        }
        let position = self.peek_position()?;
        let rings = self.read_list(|reader| reader.read_ring(dim))?;
        rules::check_triangle(&rings).map_err(|v| v.into_read_error(position))?;
        Ok(Triangle::new(dim, self.keep(GeometryType::Triangle, rings)))
    }

    /// A multi point member may be `EMPTY`, a parenthesized coordinate, or a bare coordinate.
    fn read_multi_point_member(&mut self, dim: Dimension) -> Result<Point> {
        if self.read_empty()? {
            return Ok(Point::empty(dim));
        }
        if self.peek_is(TokenKind::LeftParen)? {
            self.peeked = None;
            let coord = self.read_coord(dim)?;
            self.expect(TokenKind::RightParen, "')'")?;
            return Ok(Point::new(dim, Some(coord)));
        }
        Ok(Point::new(dim, Some(self.read_coord(dim)?)))
    }

    fn read_multi_point(&mut self, dim: Dimension) -> Result<MultiPoint> {
        if self.read_empty()? {
            return Ok(MultiPoint::empty(dim));
        }
        let points = self.read_list(|reader| reader.read_multi_point_member(dim))?;
        Ok(MultiPoint::new(dim, self.keep(GeometryType::MultiPoint, points)))
    }

    fn read_multi_line_string(&mut self, dim: Dimension) -> Result<MultiLineString> {
        if self.read_empty()? {
            return Ok(MultiLineString::empty(dim));
        }
        let curves = self.read_list(|reader| reader.read_curve(dim))?;
        Ok(MultiLineString::new(dim, self.keep(GeometryType::MultiLineString, curves)))
    }

    fn read_multi_polygon(&mut self, dim: Dimension) -> Result<MultiPolygon> {
        if self.read_empty()? {
            return Ok(MultiPolygon::empty(dim));
        }
        let polygons = self.read_list(|reader| reader.read_polygon(dim))?;
        Ok(MultiPolygon::new(dim, self.keep(GeometryType::MultiPolygon, polygons)))
    }

    fn read_segment(&mut self, dim: Dimension) -> Result<Segment> {
        if !self.peek_is(TokenKind::Word)? {
            return Ok(self.read_line_string(dim)?.into());
        }
        let (geometry_type, position) = self.read_child_type(dim)?;
        self.enter(position)?;
        let segment = match geometry_type {
            GeometryType::LineString => self.read_line_string(dim)?.into(),
            GeometryType::CircularString => self.read_circular_string(dim)?.into(),
            found => {
                return Err(WktError::IncorrectGeometryType {
                    expected: "LINESTRING or CIRCULARSTRING".into(),
                    found,
                    position,
                })
            }
        };
        self.leave();
        Ok(segment)
    }

    fn read_compound_curve(&mut self, dim: Dimension) -> Result<CompoundCurve> {
        if self.read_empty()? {
            return Ok(CompoundCurve::empty(dim));
        }
        let (segments, positions): (Vec<_>, Vec<_>) = self
            .read_list(|reader| {
                let position = reader.peek_position()?;
                let segment = reader.read_segment(dim)?;
                rules::check_segment(&segment).map_err(|v| v.into_read_error(position))?;
                Ok((segment, position))
            })?
            .into_iter()
            .unzip();
        rules::check_continuity(&segments).map_err(|v| match v {
            Violation::Discontinuous { segment } => v.into_read_error(positions[segment]),
            _ => v.into_read_error(positions[0]),
        })?;
        Ok(CompoundCurve::new(dim, self.keep(GeometryType::CompoundCurve, segments)))
    }

    /// A curve is a bare line string body, or a tagged line string, circular string, or
    /// compound curve.
    fn read_curve(&mut self, dim: Dimension) -> Result<Curve> {
        if !self.peek_is(TokenKind::Word)? {
            return Ok(self.read_line_string(dim)?.into());
        }
        let (geometry_type, position) = self.read_child_type(dim)?;
        self.enter(position)?;
        let curve = match geometry_type {
            GeometryType::LineString => self.read_line_string(dim)?.into(),
            GeometryType::CircularString => self.read_circular_string(dim)?.into(),
            GeometryType::CompoundCurve => self.read_compound_curve(dim)?.into(),
            found => {
                return Err(WktError::IncorrectGeometryType {
                    expected: "LINESTRING, CIRCULARSTRING or COMPOUNDCURVE".into(),
                    found,
                    position,
                })
            }
        };
        self.leave();
        Ok(curve)
    }

    fn read_curve_polygon(&mut self, dim: Dimension) -> Result<CurvePolygon> {
        if self.read_empty()? {
            return Ok(CurvePolygon::empty(dim));
        }
        let rings = self.read_list(|reader| reader.read_curve(dim))?;
        Ok(CurvePolygon::new(dim, self.keep(GeometryType::CurvePolygon, rings)))
    }

    fn read_multi_curve(&mut self, dim: Dimension) -> Result<MultiCurve> {
        if self.read_empty()? {
            return Ok(MultiCurve::empty(dim));
        }
        let curves = self.read_list(|reader| reader.read_curve(dim))?;
        Ok(MultiCurve::new(dim, self.keep(GeometryType::MultiCurve, curves)))
    }

    fn read_surface(&mut self, dim: Dimension) -> Result<Surface> {
        if !self.peek_is(TokenKind::Word)? {
            return Ok(self.read_polygon(dim)?.into());
        }
        let (geometry_type, position) = self.read_child_type(dim)?;
        self.enter(position)?;
        let surface = match geometry_type {
            GeometryType::Polygon => self.read_polygon(dim)?.into(),
            GeometryType::CurvePolygon => self.read_curve_polygon(dim)?.into(),
            GeometryType::PolyhedralSurface => self.read_polyhedral_surface(dim)?.into(),
            GeometryType::Tin => self.read_tin(dim)?.into(),
            GeometryType::Triangle => self.read_triangle(dim)?.into(),
            found => {
                return Err(WktError::IncorrectGeometryType {
                    expected: "POLYGON, CURVEPOLYGON, POLYHEDRALSURFACE, TIN or TRIANGLE".into(),
                    found,
                    position,
                })
            }
        };
        self.leave();
        Ok(surface)
    }

    fn read_multi_surface(&mut self, dim: Dimension) -> Result<MultiSurface> {
        if self.read_empty()? {
            return Ok(MultiSurface::empty(dim));
        }
        let surfaces = self.read_list(|reader| reader.read_surface(dim))?;
        Ok(MultiSurface::new(dim, self.keep(GeometryType::MultiSurface, surfaces)))
    }

    fn read_polyhedral_surface(&mut self, dim: Dimension) -> Result<PolyhedralSurface> {
        if self.read_empty()? {
            return Ok(PolyhedralSurface::empty(dim));
        }
        let patches = self.read_list(|reader| reader.read_polygon(dim))?;
        Ok(PolyhedralSurface::new(dim, self.keep(GeometryType::PolyhedralSurface, patches)))
    }

    fn read_tin(&mut self, dim: Dimension) -> Result<Tin> {
        if self.read_empty()? {
            return Ok(Tin::empty(dim));
        }
        let patches = self.read_list(|reader| reader.read_triangle(dim))?;
        Ok(Tin::new(dim, self.keep(GeometryType::Tin, patches)))
    }

    fn read_collection_member(&mut self, dim: Dimension) -> Result<Option<Geometry>> {
        let (geometry_type, position) = self.read_child_type(dim)?;
        self.enter(position)?;
        let geometry = self.read_body(geometry_type, dim)?;
        self.leave();
        let accepted = self.accept(Some(GeometryType::GeometryCollection), &geometry);
        Ok(accepted.then_some(geometry))
    }

    fn read_geometry_collection(&mut self, dim: Dimension) -> Result<GeometryCollection> {
        if self.read_empty()? {
            return Ok(GeometryCollection::empty(dim));
        }
        let geometries = self.read_list(|reader| reader.read_collection_member(dim))?;
        Ok(GeometryCollection::new(
            dim,
            geometries.into_iter().flatten().collect(),
        ))
    }
}

/// Split off a leading `SRID=<integer>;` prefix, returning the SRID and the offset at which
/// the geometry starts.
fn split_srid(text: &str) -> Result<(Option<i32>, usize)> {
    const PREFIX: &str = "SRID=";

    let start = text.len() - text.trim_start().len();
    let has_prefix = text[start..]
        .get(..PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(PREFIX));
    if !has_prefix {
        return Ok((None, 0));
    }

    let value_start = start + PREFIX.len();
    let Some(len) = text[value_start..].find(';') else {
        return Err(WktError::UnexpectedToken {
            expected: "';' after SRID".into(),
            found: "end of input".to_string(),
            position: text.len(),
        });
    };
    let value = text[value_start..value_start + len].trim();
    let srid = lexical_core::parse::<i32>(value.as_bytes()).map_err(|_| {
        WktError::NumberFormat {
            text: value.to_string(),
            position: value_start,
        }
    })?;
    tracing::trace!(srid, "SRID prefix");
    Ok((Some(srid), value_start + len + 1))
}
