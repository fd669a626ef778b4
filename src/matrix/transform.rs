//! Transform builders.
//!
//! Every builder folds one or more elementary matrices onto the receiver
//! with [`compose`], in the order the operations are applied. The `_self`
//! variants mutate a [`DomMatrix`] in place; the others return a new matrix
//! and leave the receiver untouched. Angles are in degrees.

use super::elementary::{
    compose, flipping_x, flipping_y, rotation, scaling, skewing_x, skewing_y, translation,
};
use super::{DomMatrix, DomMatrixReadOnly};

impl DomMatrix {
    fn fold(&mut self, elementary: &DomMatrixReadOnly) -> &mut Self {
        self.inner = compose(&self.inner, elementary);
        self
    }

    /// Translates by `(tx, ty, tz)`. Stays 2D when `tz` is zero.
    pub fn translate_self(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        self.fold(&translation(tx, ty, tz))
    }

    /// Scales by `(sx, sy, sz)` about the origin `(ox, oy, oz)`.
    pub fn scale_self(
        &mut self,
        sx: f64,
        sy: f64,
        sz: f64,
        ox: f64,
        oy: f64,
        oz: f64,
    ) -> &mut Self {
        self.translate_self(ox, oy, oz)
            .fold(&scaling(sx, sy, sz))
            .translate_self(-ox, -oy, -oz)
    }

    /// Uniform scale about `(ox, oy, oz)`.
    pub fn scale3d_self(&mut self, scale: f64, ox: f64, oy: f64, oz: f64) -> &mut Self {
        self.scale_self(scale, scale, scale, ox, oy, oz)
    }

    /// Rotation about the Z axis.
    pub fn rotate_self(&mut self, rot_z: f64) -> &mut Self {
        self.rotate3d_self(0.0, 0.0, rot_z)
    }

    /// Rotation about Z, then Y, then X. Zero angles are skipped.
    #[allow(clippy::float_cmp)]
    pub fn rotate3d_self(&mut self, rot_x: f64, rot_y: f64, rot_z: f64) -> &mut Self {
        if rot_z != 0.0 {
            self.fold(&rotation(0.0, 0.0, 1.0, rot_z));
        }
        if rot_y != 0.0 {
            self.fold(&rotation(0.0, 1.0, 0.0, rot_y));
        }
        if rot_x != 0.0 {
            self.fold(&rotation(1.0, 0.0, 0.0, rot_x));
        }
        self
    }

    /// Rotation by the angle of the vector `(x, y)`, or none for the zero vector.
    #[allow(clippy::float_cmp)]
    pub fn rotate_from_vector_self(&mut self, x: f64, y: f64) -> &mut Self {
        let theta = if x == 0.0 && y == 0.0 {
            0.0
        } else {
            y.atan2(x).to_degrees()
        };
        self.rotate_self(theta)
    }

    /// Rotation by `angle` about the axis `(x, y, z)`.
    ///
    /// The axis is normalized unless its length is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn rotate_axis_angle_self(&mut self, x: f64, y: f64, z: f64, angle: f64) -> &mut Self {
        let len = (x * x + y * y + z * z).sqrt();
        let (x, y, z) = if len == 0.0 {
            (x, y, z)
        } else {
            (x / len, y / len, z / len)
        };
        self.fold(&rotation(x, y, z, angle))
    }

    /// Skews along X by `sx` degrees.
    pub fn skew_x_self(&mut self, sx: f64) -> &mut Self {
        self.fold(&skewing_x(sx))
    }

    /// Skews along Y by `sy` degrees.
    pub fn skew_y_self(&mut self, sy: f64) -> &mut Self {
        self.fold(&skewing_y(sy))
    }

    /// Post-multiplies: the result applies `other` first, then `self`.
    pub fn multiply_self(&mut self, other: &DomMatrixReadOnly) -> &mut Self {
        self.fold(other)
    }

    /// Pre-multiplies: the result applies `self` first, then `other`.
    pub fn pre_multiply_self(&mut self, other: &DomMatrixReadOnly) -> &mut Self {
        self.inner = compose(other, &self.inner);
        self
    }

    /// Replaces this matrix by its inverse. See [`DomMatrixReadOnly::inverse`].
    pub fn invert_self(&mut self) -> &mut Self {
        self.inner = self.inner.inverse().into_read_only();
        self
    }
}

impl DomMatrixReadOnly {
    fn with(&self, build: impl FnOnce(&mut DomMatrix)) -> DomMatrix {
        let mut out = DomMatrix::from(*self);
        build(&mut out);
        out
    }

    /// Returns a copy translated by `(tx, ty, tz)`.
    #[must_use]
    pub fn translate(&self, tx: f64, ty: f64, tz: f64) -> DomMatrix {
        self.with(|m| {
            m.translate_self(tx, ty, tz);
        })
    }

    /// See [`DomMatrix::scale_self`].
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64, sz: f64, ox: f64, oy: f64, oz: f64) -> DomMatrix {
        self.with(|m| {
            m.scale_self(sx, sy, sz, ox, oy, oz);
        })
    }

    /// Scale by `(sx, sy)` about the origin.
    #[must_use]
    pub fn scale_non_uniform(&self, sx: f64, sy: f64) -> DomMatrix {
        self.scale(sx, sy, 1.0, 0.0, 0.0, 0.0)
    }

    /// Returns a copy uniformly scaled about `(ox, oy, oz)`.
    #[must_use]
    pub fn scale3d(&self, scale: f64, ox: f64, oy: f64, oz: f64) -> DomMatrix {
        self.with(|m| {
            m.scale3d_self(scale, ox, oy, oz);
        })
    }

    /// Returns a copy rotated by `rot_z` degrees about the Z axis.
    #[must_use]
    pub fn rotate(&self, rot_z: f64) -> DomMatrix {
        self.with(|m| {
            m.rotate_self(rot_z);
        })
    }

    /// See [`DomMatrix::rotate3d_self`].
    #[must_use]
    pub fn rotate3d(&self, rot_x: f64, rot_y: f64, rot_z: f64) -> DomMatrix {
        self.with(|m| {
            m.rotate3d_self(rot_x, rot_y, rot_z);
        })
    }

    /// See [`DomMatrix::rotate_from_vector_self`].
    #[must_use]
    pub fn rotate_from_vector(&self, x: f64, y: f64) -> DomMatrix {
        self.with(|m| {
            m.rotate_from_vector_self(x, y);
        })
    }

    /// Returns a copy rotated by `angle` degrees about `(x, y, z)`.
    #[must_use]
    pub fn rotate_axis_angle(&self, x: f64, y: f64, z: f64, angle: f64) -> DomMatrix {
        self.with(|m| {
            m.rotate_axis_angle_self(x, y, z, angle);
        })
    }

    /// Returns a copy skewed along X by `sx` degrees.
    #[must_use]
    pub fn skew_x(&self, sx: f64) -> DomMatrix {
        self.with(|m| {
            m.skew_x_self(sx);
        })
    }

    /// Returns a copy skewed along Y by `sy` degrees.
    #[must_use]
    pub fn skew_y(&self, sy: f64) -> DomMatrix {
        self.with(|m| {
            m.skew_y_self(sy);
        })
    }

    /// Returns a copy mirrored across the Y axis (x negated).
    #[must_use]
    pub fn flip_x(&self) -> DomMatrix {
        self.with(|m| {
            m.fold(&flipping_x());
        })
    }

    /// Returns a copy mirrored across the X axis (y negated).
    #[must_use]
    pub fn flip_y(&self) -> DomMatrix {
        self.with(|m| {
            m.fold(&flipping_y());
        })
    }

    /// Returns `compose(self, other)`: `other` is applied first.
    #[must_use]
    pub fn multiply(&self, other: &DomMatrixReadOnly) -> DomMatrix {
        DomMatrix::from(compose(self, other))
    }
}
