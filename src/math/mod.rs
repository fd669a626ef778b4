/// Homogeneous 4-component vector type.
pub type Vector4 = nalgebra::Vector4<f64>;

/// 4x4 transformation matrix (column-vector convention).
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for approximate floating-point comparisons.
///
/// Never used by the transform arithmetic itself.
pub const TOLERANCE: f64 = 1e-10;

/// `SameValueZero` equality: NaN equals NaN, and `+0` equals `-0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Smaller of `a` and `b`, or NaN if either is NaN.
#[must_use]
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Larger of `a` and `b`, or NaN if either is NaN.
#[must_use]
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
