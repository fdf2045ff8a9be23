//! Error handling for FrameKit
//!
//! Provides error types for all layers of the engine:
//! - Geometry errors (degenerate regions, members, layout inputs)
//! - Registry errors (unknown identifiers)
//! - Session errors (workflow preconditions)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when an input cannot form a valid region, member or layout.
/// These are caller bugs and are reported loudly rather than tolerated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The vertex set cannot form a region
    #[error("Invalid region: {reason}")]
    InvalidRegion {
        /// Why the region was rejected.
        reason: String,
    },

    /// The endpoints cannot form a member
    #[error("Invalid member: {reason}")]
    InvalidMember {
        /// Why the member was rejected.
        reason: String,
    },

    /// Spacing must be finite and strictly positive
    #[error("Invalid spacing {spacing}: must be finite and > 0")]
    InvalidSpacing {
        /// The rejected spacing value.
        spacing: f64,
    },

    /// The reference edge has zero length and defines no direction
    #[error("Reference edge has zero length")]
    DegenerateEdge,

    /// The spacing would produce an unreasonable number of candidate lines
    #[error("Layout would generate {count} lines (limit {limit})")]
    TooManyLines {
        /// Number of lines the layout would have produced.
        count: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl GeometryError {
    /// Create an `InvalidRegion` error from a message
    pub fn invalid_region(reason: impl Into<String>) -> Self {
        GeometryError::InvalidRegion {
            reason: reason.into(),
        }
    }

    /// Create an `InvalidMember` error from a message
    pub fn invalid_member(reason: impl Into<String>) -> Self {
        GeometryError::InvalidMember {
            reason: reason.into(),
        }
    }
}

/// Registry error type
///
/// Raised when an operation names a node the registry does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Node not found
    #[error("Node not found: {id}")]
    NodeNotFound {
        /// The missing node identifier.
        id: String,
    },
}

/// Session error type
///
/// Preconditions of the drafting workflow that a click did not satisfy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Columns need a floor below the current one
    #[error("No floor below floor {floor} to connect a column to")]
    NoFloorBelow {
        /// The current floor.
        floor: i32,
    },

    /// Edge-aligned layout needs an existing member to align to
    #[error("No reference member on floor {floor}")]
    NoReferenceEdge {
        /// The floor that was searched.
        floor: i32,
    },

    /// The click did not land inside any region
    #[error("No region contains ({x:.2}, {y:.2}) on floor {floor}")]
    NoRegionAtPoint {
        /// Click X coordinate.
        x: f64,
        /// Click Y coordinate.
        y: f64,
        /// The floor that was searched.
        floor: i32,
    },

    /// A region needs at least three picked vertices
    #[error("Region needs at least 3 vertices, {picked} picked")]
    NotEnoughVertices {
        /// Number of vertices picked so far.
        picked: usize,
    },
}

/// Main error type for FrameKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an `InvalidRegion` error
    pub fn is_invalid_region(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::InvalidRegion { .. }))
    }

    /// Check if this is an `InvalidMember` error
    pub fn is_invalid_member(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::InvalidMember { .. }))
    }

    /// Check if this is a registry error
    pub fn is_registry_error(&self) -> bool {
        matches!(self, Error::Registry(_))
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
