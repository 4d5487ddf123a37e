//! Defines [`WktError`], representing all errors returned by this crate.

use std::borrow::Cow;

use thiserror::Error;

use crate::datatypes::{Dimension, GeometryType};

/// Enum with all errors in this crate.
///
/// Reader errors carry the byte offset into the input text where the problem was detected.
/// Writer errors carry the byte offset into the output written so far.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    /// A character that cannot start any token.
    #[error("Unexpected character {character:?} at position {position}")]
    Lex { character: char, position: usize },

    /// A word that does not name a geometry type.
    #[error("Unknown geometry type {keyword:?} at position {position}")]
    UnknownGeometryType { keyword: String, position: usize },

    /// The token stream did not match the grammar.
    #[error("Expected {expected} but found {found} at position {position}")]
    UnexpectedToken {
        expected: Cow<'static, str>,
        found: String,
        position: usize,
    },

    /// A coordinate group had the wrong number of components for its dimension.
    #[error(
        "Coordinate has {found} values but dimension {dimension} requires {} at position {position}",
        .dimension.size()
    )]
    CoordinateArity {
        dimension: Dimension,
        found: usize,
        position: usize,
    },

    /// A nested geometry declared a dimension different from its parent.
    #[error("Expected dimension {expected} but found {found} at position {position}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
        position: usize,
    },

    /// A numeric literal could not be parsed.
    #[error("Invalid number {text:?} at position {position}")]
    NumberFormat { text: String, position: usize },

    /// A coordinate sequence violated the count rule of its geometry type.
    #[error("{geometry_type} requires {requirement} coordinates but found {found} at position {position}")]
    CoordinateCount {
        geometry_type: GeometryType,
        requirement: &'static str,
        found: usize,
        position: usize,
    },

    /// A polygon or triangle ring whose first and last coordinates differ.
    #[error("Ring is not closed at position {position}")]
    RingNotClosed { position: usize },

    /// A compound curve segment that does not start where the previous one ended.
    #[error("Compound curve segment {segment} does not start at the previous end point at position {position}")]
    CurveContinuity { segment: usize, position: usize },

    /// Non-whitespace input after the geometry.
    #[error("Unexpected trailing content at position {position}")]
    TrailingContent { position: usize },

    /// Geometry nesting exceeded the configured limit.
    #[error("Geometry nesting exceeds the limit of {limit} at position {position}")]
    NestingTooDeep { limit: usize, position: usize },

    /// The geometry read was not of the requested type.
    #[error("Expected geometry type {expected} but found {found} at position {position}")]
    IncorrectGeometryType {
        expected: Cow<'static, str>,
        found: GeometryType,
        position: usize,
    },

    /// The writer was handed a geometry that cannot be written as valid WKT.
    #[error("Invalid geometry: {message} at position {position}")]
    InvalidGeometry { message: String, position: usize },

    /// [std::fmt::Error] from the output sink.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

impl WktError {
    /// The position at which this error was detected, if any.
    pub fn position(&self) -> Option<usize> {
        use WktError::*;
        match self {
            Lex { position, .. }
            | UnknownGeometryType { position, .. }
            | UnexpectedToken { position, .. }
            | CoordinateArity { position, .. }
            | DimensionMismatch { position, .. }
            | NumberFormat { position, .. }
            | CoordinateCount { position, .. }
            | RingNotClosed { position }
            | CurveContinuity { position, .. }
            | TrailingContent { position }
            | NestingTooDeep { position, .. }
            | IncorrectGeometryType { position, .. }
            | InvalidGeometry { position, .. } => Some(*position),
            Fmt(_) => None,
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WktError>;
