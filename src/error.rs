//! Error types for the physics engine.

use thiserror::Error;

/// Result type alias for fallible engine operations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Errors surfaced to callers. Numeric degeneracies (zero-length vectors,
/// coincident centers, zero-area polygons) are not errors; they show up as
/// non-finite values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// The separating axis test needs at least one polygon.
    #[error("separating axis test requires at least one polygon operand")]
    NoPolygonOperand,

    /// Shape data that cannot describe a body.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Mass must be positive and finite.
    #[error("invalid mass: {0}")]
    InvalidMass(f64),

    /// A body with this tag is already in the world.
    #[error("duplicate body tag: {0}")]
    DuplicateTag(String),

    /// No body with this tag is in the world.
    #[error("unknown body tag: {0}")]
    UnknownTag(String),
}

impl PhysicsError {
    /// Create an invalid geometry error.
    #[must_use]
    pub fn invalid_geometry(details: impl Into<String>) -> Self {
        Self::InvalidGeometry(details.into())
    }

    /// Create a duplicate tag error.
    #[must_use]
    pub fn duplicate_tag(tag: impl Into<String>) -> Self {
        Self::DuplicateTag(tag.into())
    }

    /// Create an unknown tag error.
    #[must_use]
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag(tag.into())
    }
}
