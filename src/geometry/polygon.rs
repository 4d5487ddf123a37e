use crate::geometry::{sequence_geometry, Curve, LineString};

sequence_geometry!(
    /// A planar surface bounded by an exterior ring and zero or more interior rings.
    Polygon,
    rings: LineString
);

impl Polygon {
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }
}

sequence_geometry!(
    /// A polygon with a single ring of exactly three distinct vertices plus the closing vertex.
    Triangle,
    rings: LineString
);

impl Triangle {
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }
}

sequence_geometry!(
    /// A surface whose rings may contain circular arcs.
    CurvePolygon,
    rings: Curve
);

sequence_geometry!(
    /// A contiguous collection of polygons sharing common boundary segments.
    PolyhedralSurface,
    patches: Polygon
);

sequence_geometry!(
    /// A triangulated irregular network: a polyhedral surface made only of triangles.
    Tin,
    patches: Triangle
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::Coord;

    #[test]
    fn exterior_and_interiors() {
        let ring = |offset: f64| {
            LineString::from(vec![
                Coord::xy(offset, offset),
                Coord::xy(offset + 1., offset),
                Coord::xy(offset, offset + 1.),
                Coord::xy(offset, offset),
            ])
        };
        let polygon = Polygon::from(vec![ring(0.), ring(10.), ring(20.)]);
        assert_eq!(polygon.exterior(), Some(&ring(0.)));
        assert_eq!(polygon.interiors().len(), 2);

        let empty = Polygon::empty(Dimension::XYZ);
        assert_eq!(empty.exterior(), None);
        assert!(empty.interiors().is_empty());
    }
}
