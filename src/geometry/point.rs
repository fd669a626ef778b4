use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Vector4;
use crate::matrix::{DomMatrixInit, DomMatrixReadOnly};

/// Partially-specified point, as handed over by a host binding.
///
/// Missing fields default to `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomPointInit {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub w: Option<f64>,
}

impl DomPointInit {
    /// Creates a fully-specified init.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
            w: Some(w),
        }
    }
}

/// A homogeneous coordinate `(x, y, z, w)` that cannot be mutated.
///
/// Non-finite components are accepted and propagate through arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomPointReadOnly {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Default for DomPointReadOnly {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl DomPointReadOnly {
    /// Creates a new point from its four components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Builds a point from a dictionary, defaulting missing fields.
    #[must_use]
    pub fn from_point(init: &DomPointInit) -> Self {
        Self {
            x: init.x.unwrap_or(0.0),
            y: init.y.unwrap_or(0.0),
            z: init.z.unwrap_or(0.0),
            w: init.w.unwrap_or(1.0),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[must_use]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Applies `matrix` to this point. See [`DomMatrixReadOnly::transform_point`].
    #[must_use]
    pub fn apply_matrix(&self, matrix: &DomMatrixReadOnly) -> DomPoint {
        matrix.transform_point(self)
    }

    /// Reconciles `init` into a matrix, then applies it to this point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`](crate::GeometryError::InvalidMatrix)
    /// if the init dictionary is inconsistent.
    pub fn matrix_transform(&self, init: &DomMatrixInit) -> Result<DomPoint> {
        let matrix = DomMatrixReadOnly::from_matrix(init)?;
        Ok(matrix.transform_point(self))
    }

    /// Returns the components as a fully-populated dictionary.
    #[must_use]
    pub fn to_dictionary(&self) -> DomPointInit {
        DomPointInit::new(self.x, self.y, self.z, self.w)
    }
}

impl From<DomPointReadOnly> for Vector4 {
    fn from(p: DomPointReadOnly) -> Self {
        Vector4::new(p.x, p.y, p.z, p.w)
    }
}

impl From<Vector4> for DomPointReadOnly {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

/// Mutable point. Reads go through [`DomPointReadOnly`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomPoint {
    inner: DomPointReadOnly,
}

impl DomPoint {
    /// Creates a new mutable point.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            inner: DomPointReadOnly::new(x, y, z, w),
        }
    }

    /// Builds a mutable point from a dictionary.
    #[must_use]
    pub fn from_point(init: &DomPointInit) -> Self {
        Self {
            inner: DomPointReadOnly::from_point(init),
        }
    }

    pub fn set_x(&mut self, x: f64) {
        self.inner.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.inner.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.inner.z = z;
    }

    pub fn set_w(&mut self, w: f64) {
        self.inner.w = w;
    }

    /// Freezes this point into its read-only form.
    #[must_use]
    pub fn into_read_only(self) -> DomPointReadOnly {
        self.inner
    }
}

impl Deref for DomPoint {
    type Target = DomPointReadOnly;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<DomPointReadOnly> for DomPoint {
    fn from(inner: DomPointReadOnly) -> Self {
        Self { inner }
    }
}
