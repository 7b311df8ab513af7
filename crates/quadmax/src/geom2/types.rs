//! World rectangle and the point validation error.
//!
//! - `Bounds2`: axis-aligned world rectangle used by point generators and I/O.
//! - `PointError`: the only error surfaced by the library.

use nalgebra::Vector2;
use std::fmt;

/// Errors raised when validating coordinates or generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PointError {
    /// Coordinate is NaN or infinite.
    NonFinite { x: f64, y: f64 },
    InvalidBounds { reason: String },
    InvalidConfig { reason: String },
}

impl PointError {
    pub(crate) fn bounds(reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { x, y } => write!(f, "point ({x}, {y}) has a non-finite coordinate"),
            Self::InvalidBounds { reason } => write!(f, "invalid bounds: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for PointError {}

/// Check that a position can enter a point set.
#[inline]
pub(crate) fn check_finite(p: Vector2<f64>) -> Result<Vector2<f64>, PointError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(PointError::NonFinite { x: p.x, y: p.y })
    }
}

/// Closed axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Vector2::new(-10.0, -10.0),
            max: Vector2::new(10.0, 10.0),
        }
    }
}

impl Bounds2 {
    /// Validated constructor: finite corners with `min < max` on both axes.
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Result<Self, PointError> {
        check_finite(min).map_err(|_| PointError::bounds("min corner is not finite"))?;
        check_finite(max).map_err(|_| PointError::bounds("max corner is not finite"))?;
        if min.x >= max.x || min.y >= max.y {
            return Err(PointError::bounds(format!(
                "min ({}, {}) must be strictly below max ({}, {})",
                min.x, min.y, max.x, max.y
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Map unit-square coordinates `u ∈ [0,1]²` into the rectangle.
    #[inline]
    pub fn lerp(&self, u: Vector2<f64>) -> Vector2<f64> {
        self.min + self.size().component_mul(&u)
    }
}
