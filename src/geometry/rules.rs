//! Structural rules shared by the reader and the writer.
//!
//! The reader reports a broken rule at the input position of the offending body. The writer
//! reports it as [`WktError::InvalidGeometry`], so that anything it writes can be read back.

use itertools::Itertools;

use crate::datatypes::GeometryType;
use crate::error::WktError;
use crate::geometry::{Coord, LineString, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Violation {
    CoordinateCount {
        geometry_type: GeometryType,
        requirement: &'static str,
        found: usize,
    },
    RingNotClosed,
    Discontinuous {
        segment: usize,
    },
}

impl Violation {
    pub(crate) fn into_read_error(self, position: usize) -> WktError {
        match self {
            Violation::CoordinateCount {
                geometry_type,
                requirement,
                found,
            } => WktError::CoordinateCount {
                geometry_type,
                requirement,
                found,
                position,
            },
            Violation::RingNotClosed => WktError::RingNotClosed { position },
            Violation::Discontinuous { segment } => WktError::CurveContinuity { segment, position },
        }
    }

    pub(crate) fn into_write_error(self, position: usize) -> WktError {
        let message = match self {
            Violation::CoordinateCount {
                geometry_type,
                requirement,
                found,
            } => format!("{geometry_type} requires {requirement} coordinates but has {found}"),
            Violation::RingNotClosed => "ring is not closed".to_string(),
            Violation::Discontinuous { segment } => format!(
                "compound curve segment {segment} does not start at the previous end point"
            ),
        };
        WktError::InvalidGeometry { message, position }
    }
}

pub(crate) type RuleResult = std::result::Result<(), Violation>;

/// Empty, or at least two coordinates.
pub(crate) fn check_line_string(coords: &[Coord]) -> RuleResult {
    if coords.len() == 1 {
        return Err(Violation::CoordinateCount {
            geometry_type: GeometryType::LineString,
            requirement: "at least 2",
            found: 1,
        });
    }
    Ok(())
}

/// Empty, or an odd number of coordinates, at least three.
pub(crate) fn check_circular_string(coords: &[Coord]) -> RuleResult {
    let n = coords.len();
    if n != 0 && (n < 3 || n % 2 == 0) {
        return Err(Violation::CoordinateCount {
            geometry_type: GeometryType::CircularString,
            requirement: "an odd number (at least 3) of",
            found: n,
        });
    }
    Ok(())
}

/// A non-empty polygon ring whose first and last coordinates are equal.
pub(crate) fn check_ring(coords: &[Coord]) -> RuleResult {
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) if first == last => Ok(()),
        (Some(_), Some(_)) => Err(Violation::RingNotClosed),
        _ => Err(Violation::CoordinateCount {
            geometry_type: GeometryType::Polygon,
            requirement: "at least 1 ring of at least 1",
            found: 0,
        }),
    }
}

/// Empty, or exactly one closed ring of exactly four coordinates.
pub(crate) fn check_triangle(rings: &[LineString]) -> RuleResult {
    match rings {
        [] => Ok(()),
        [ring] if ring.len() == 4 => check_ring(ring.coords()),
        [ring] => Err(Violation::CoordinateCount {
            geometry_type: GeometryType::Triangle,
            requirement: "exactly 4",
            found: ring.len(),
        }),
        _ => Err(Violation::CoordinateCount {
            geometry_type: GeometryType::Triangle,
            requirement: "a single ring of exactly 4",
            found: rings.iter().map(LineString::len).sum(),
        }),
    }
}

/// A compound curve segment must be non-empty and satisfy the rule of its own type.
pub(crate) fn check_segment(segment: &Segment) -> RuleResult {
    let coords = segment.coords();
    if coords.is_empty() {
        return Err(Violation::CoordinateCount {
            geometry_type: segment.geometry_type(),
            requirement: "non-zero",
            found: 0,
        });
    }
    match segment {
        Segment::LineString(_) => check_line_string(coords),
        Segment::CircularString(_) => check_circular_string(coords),
    }
}

/// Each segment after the first must start where the previous one ended.
pub(crate) fn check_continuity(segments: &[Segment]) -> RuleResult {
    for (i, (prev, next)) in segments.iter().tuple_windows().enumerate() {
        if prev.coords().last() != next.coords().first() {
            return Err(Violation::Discontinuous { segment: i + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::CircularString;

    fn coords(values: &[(f64, f64)]) -> Vec<Coord> {
        values.iter().map(|&(x, y)| Coord::xy(x, y)).collect()
    }

    #[test]
    fn line_string_counts() {
        assert!(check_line_string(&[]).is_ok());
        assert!(check_line_string(&coords(&[(0., 0.)])).is_err());
        assert!(check_line_string(&coords(&[(0., 0.), (1., 1.)])).is_ok());
    }

    #[test]
    fn circular_string_counts() {
        assert!(check_circular_string(&[]).is_ok());
        assert!(check_circular_string(&coords(&[(0., 0.), (1., 1.)])).is_err());
        assert!(check_circular_string(&coords(&[(0., 0.), (1., 1.), (2., 0.)])).is_ok());
        assert!(check_circular_string(&coords(&[(0., 0.), (1., 1.), (2., 0.), (3., 1.)])).is_err());
    }

    #[test]
    fn rings() {
        assert_eq!(
            check_ring(&coords(&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)])),
            Ok(())
        );
        assert_eq!(
            check_ring(&coords(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])),
            Err(Violation::RingNotClosed)
        );
    }

    #[test]
    fn triangles() {
        let ring = LineString::from(coords(&[(0., 0.), (1., 0.), (0., 1.), (0., 0.)]));
        assert!(check_triangle(&[ring.clone()]).is_ok());
        assert!(check_triangle(&[ring.clone(), ring]).is_err());

        let square = LineString::from(coords(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)]));
        assert!(matches!(
            check_triangle(&[square]),
            Err(Violation::CoordinateCount { found: 5, .. })
        ));
    }

    #[test]
    fn continuity() {
        let arc = CircularString::new(Dimension::XY, coords(&[(0., 0.), (1., 1.), (2., 0.)]));
        let joined = LineString::from(coords(&[(2., 0.), (3., 0.)]));
        let gap = LineString::from(coords(&[(2., 1.), (3., 0.)]));

        assert!(check_continuity(&[arc.clone().into(), joined.into()]).is_ok());
        assert_eq!(
            check_continuity(&[arc.into(), gap.into()]),
            Err(Violation::Discontinuous { segment: 1 })
        );
    }
}
