//! 4x4 homogeneous transform matrices.
//!
//! Components are stored row-major as `m11, m12, .., m44`. A point is
//! treated as the row vector `(x, y, z, w)` and multiplied on the left, so
//! `m41`, `m42`, `m43` hold the translation. The 2D aliases `a`..`f` share
//! storage with `m11`, `m12`, `m21`, `m22`, `m41`, `m42`.

mod elementary;
mod init;
mod invert;
mod serialize;
mod transform;

use std::ops::Deref;

pub use elementary::compose;
pub use init::{DomMatrix2DInit, DomMatrixInit};

use crate::error::{GeometryError, Result};
use crate::geometry::{DomPoint, DomPointReadOnly};

/// Row-major identity storage.
pub(crate) const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Storage indices of the components that must sit at their identity value
/// for a matrix to be 2D: `m13 m14 m23 m24 m31 m32 m33 m34 m43 m44`.
pub(crate) const THREE_D_ONLY: [usize; 10] = [2, 3, 6, 7, 8, 9, 10, 11, 14, 15];

/// Returns `true` if every 3D-only component of `m` is at its identity value.
#[allow(clippy::float_cmp)]
pub(crate) fn has_2d_shape(m: &[f64; 16]) -> bool {
    THREE_D_ONLY.iter().all(|&i| m[i] == IDENTITY[i])
}

macro_rules! component_getters {
    ($($name:ident => $idx:expr),* $(,)?) => {
        $(
            #[must_use]
            pub fn $name(&self) -> f64 {
                self.m[$idx]
            }
        )*
    };
}

/// An immutable 4x4 homogeneous transform with a cached 2D classification.
///
/// `is_2d` is only ever `true` while every 3D-only component is at its
/// identity value. It can be `false` for a matrix that happens to have 2D
/// shape (e.g. one built from a 16-element sequence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomMatrixReadOnly {
    pub(crate) m: [f64; 16],
    pub(crate) is_2d: bool,
}

impl Default for DomMatrixReadOnly {
    fn default() -> Self {
        Self::identity()
    }
}

impl DomMatrixReadOnly {
    /// The 2D identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: IDENTITY,
            is_2d: true,
        }
    }

    /// Builds a 2D matrix from `a, b, c, d, e, f`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_2d(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        let mut m = IDENTITY;
        m[0] = a;
        m[1] = b;
        m[4] = c;
        m[5] = d;
        m[12] = e;
        m[13] = f;
        Self { m, is_2d: true }
    }

    /// Builds a 3D matrix from row-major `m11..m44`.
    #[must_use]
    pub fn from_3d(m: [f64; 16]) -> Self {
        Self { m, is_2d: false }
    }

    /// Builds a matrix from a flat sequence of 6 (2D) or 16 (3D) values.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] for any other length.
    pub fn from_sequence(values: &[f64]) -> Result<Self> {
        tracing::trace!(len = values.len(), "matrix from sequence");
        match *values {
            [a, b, c, d, e, f] => Ok(Self::from_2d(a, b, c, d, e, f)),
            _ => {
                let m: [f64; 16] = values
                    .try_into()
                    .map_err(|_| GeometryError::InvalidLength { len: values.len() })?;
                Ok(Self::from_3d(m))
            }
        }
    }

    /// Same as [`from_sequence`](Self::from_sequence) for single-precision input.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] unless `values` has 6 or 16 elements.
    pub fn from_float32_array(values: &[f32]) -> Result<Self> {
        let widened: Vec<f64> = values.iter().copied().map(f64::from).collect();
        Self::from_sequence(&widened)
    }

    /// Same as [`from_sequence`](Self::from_sequence).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] unless `values` has 6 or 16 elements.
    pub fn from_float64_array(values: &[f64]) -> Result<Self> {
        Self::from_sequence(values)
    }

    /// Builds a matrix from a partially-specified dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`] if the dictionary fails
    /// reconciliation.
    pub fn from_matrix(init: &DomMatrixInit) -> Result<Self> {
        Ok(init.validate_and_fixup()?.to_matrix())
    }

    /// Builds a 2D matrix from a partially-specified 2D dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`] if aliased fields disagree.
    pub fn from_2d_matrix(init: &DomMatrix2DInit) -> Result<Self> {
        Ok(init.validate_and_fixup()?.to_matrix())
    }

    component_getters! {
        a => 0, b => 1, c => 4, d => 5, e => 12, f => 13,
        m11 => 0, m12 => 1, m13 => 2, m14 => 3,
        m21 => 4, m22 => 5, m23 => 6, m24 => 7,
        m31 => 8, m32 => 9, m33 => 10, m34 => 11,
        m41 => 12, m42 => 13, m43 => 14, m44 => 15,
    }

    /// Component at 1-based row `r` and column `c`.
    pub(crate) fn at(&self, r: usize, c: usize) -> f64 {
        self.m[(r - 1) * 4 + (c - 1)]
    }

    /// Returns `true` if this matrix is classified as 2D.
    #[must_use]
    pub fn is_2d(&self) -> bool {
        self.is_2d
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.m.iter().zip(IDENTITY.iter()).all(|(v, id)| v == id)
    }

    /// Applies this matrix to `point`.
    ///
    /// Output coordinate `c` is `sum(point[k] * m(k, c))` over `k = 1..4`,
    /// with `point = (x, y, z, w)`.
    #[must_use]
    pub fn transform_point(&self, point: &DomPointReadOnly) -> DomPoint {
        let p = [point.x(), point.y(), point.z(), point.w()];
        let out: [f64; 4] = std::array::from_fn(|c| {
            self.at(1, c + 1) * p[0]
                + self.at(2, c + 1) * p[1]
                + self.at(3, c + 1) * p[2]
                + self.at(4, c + 1) * p[3]
        });
        DomPoint::new(out[0], out[1], out[2], out[3])
    }
}

macro_rules! component_setters {
    ($($name:ident => $idx:expr),* $(,)?) => {
        $(
            pub fn $name(&mut self, value: f64) {
                self.inner.m[$idx] = value;
            }
        )*
    };
}

macro_rules! component_setters_3d {
    ($($name:ident => $idx:expr),* $(,)?) => {
        $(
            pub fn $name(&mut self, value: f64) {
                self.set_3d_only($idx, value);
            }
        )*
    };
}

/// Mutable matrix. Reads go through [`DomMatrixReadOnly`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomMatrix {
    inner: DomMatrixReadOnly,
}

impl DomMatrix {
    /// The 2D identity matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`DomMatrixReadOnly::from_sequence`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] unless `values` has 6 or 16 elements.
    pub fn from_sequence(values: &[f64]) -> Result<Self> {
        DomMatrixReadOnly::from_sequence(values).map(Self::from)
    }

    /// See [`DomMatrixReadOnly::from_matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`] if the dictionary fails
    /// reconciliation.
    pub fn from_matrix(init: &DomMatrixInit) -> Result<Self> {
        DomMatrixReadOnly::from_matrix(init).map(Self::from)
    }

    component_setters! {
        set_a => 0, set_b => 1, set_c => 4, set_d => 5, set_e => 12, set_f => 13,
        set_m11 => 0, set_m12 => 1, set_m21 => 4, set_m22 => 5, set_m41 => 12, set_m42 => 13,
    }

    component_setters_3d! {
        set_m13 => 2, set_m14 => 3, set_m23 => 6, set_m24 => 7,
        set_m31 => 8, set_m32 => 9, set_m33 => 10, set_m34 => 11,
        set_m43 => 14, set_m44 => 15,
    }

    /// Writes a 3D-only component, dropping the 2D classification if the
    /// value leaves its identity value. Never sets it back.
    #[allow(clippy::float_cmp)]
    fn set_3d_only(&mut self, idx: usize, value: f64) {
        self.inner.m[idx] = value;
        if value != IDENTITY[idx] {
            self.inner.is_2d = false;
        }
    }

    /// Freezes this matrix into its read-only form.
    #[must_use]
    pub fn into_read_only(self) -> DomMatrixReadOnly {
        self.inner
    }
}

impl Deref for DomMatrix {
    type Target = DomMatrixReadOnly;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<DomMatrixReadOnly> for DomMatrix {
    fn from(inner: DomMatrixReadOnly) -> Self {
        Self { inner }
    }
}
