//! Composition and the elementary matrices every transform builder folds in.

use super::{DomMatrixReadOnly, IDENTITY};

/// Composes `a` with `b` so that the result applies `b` first, then `a`.
///
/// `compose(a, b).m(r, c) = sum(b.m(r, k) * a.m(k, c))` over `k = 1..4`,
/// accumulated in ascending `k` from `0.0`. The result is 2D only if both
/// inputs are.
#[must_use]
pub fn compose(a: &DomMatrixReadOnly, b: &DomMatrixReadOnly) -> DomMatrixReadOnly {
    let mut m = [0.0; 16];
    for r in 1..=4 {
        for c in 1..=4 {
            let mut sum = 0.0;
            for k in 1..=4 {
                sum += b.at(r, k) * a.at(k, c);
            }
            m[(r - 1) * 4 + (c - 1)] = sum;
        }
    }
    DomMatrixReadOnly {
        m,
        is_2d: a.is_2d && b.is_2d,
    }
}

/// Translation by `(tx, ty, tz)`; 2D when `tz == 0`.
#[allow(clippy::float_cmp)]
pub(crate) fn translation(tx: f64, ty: f64, tz: f64) -> DomMatrixReadOnly {
    let mut m = IDENTITY;
    m[12] = tx;
    m[13] = ty;
    m[14] = tz;
    DomMatrixReadOnly { m, is_2d: tz == 0.0 }
}

/// Scale by `(sx, sy, sz)`; 2D when `sz == 1`.
#[allow(clippy::float_cmp)]
pub(crate) fn scaling(sx: f64, sy: f64, sz: f64) -> DomMatrixReadOnly {
    let mut m = IDENTITY;
    m[0] = sx;
    m[5] = sy;
    m[10] = sz;
    DomMatrixReadOnly { m, is_2d: sz == 1.0 }
}

/// Rotation by `degrees` about the unit axis `(x, y, z)`.
///
/// Built from the half-angle sine and cosine. An axis along Z (`x == y == 0`)
/// yields the 2D rotation form.
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub(crate) fn rotation(x: f64, y: f64, z: f64, degrees: f64) -> DomMatrixReadOnly {
    let half = degrees.to_radians() / 2.0;
    let s = half.sin();
    let c = half.cos();
    let sc = s * c;
    let sq = s * s;
    let (x2, y2, z2) = (x * x, y * y, z * z);

    if x == 0.0 && y == 0.0 {
        let cos = 1.0 - 2.0 * z2 * sq;
        let sin = 2.0 * z * sc;
        return DomMatrixReadOnly::from_2d(cos, sin, -sin, cos, 0.0, 0.0);
    }

    let mut m = IDENTITY;
    m[0] = 1.0 - 2.0 * (y2 + z2) * sq;
    m[1] = 2.0 * (x * y * sq + z * sc);
    m[2] = 2.0 * (x * z * sq - y * sc);
    m[4] = 2.0 * (x * y * sq - z * sc);
    m[5] = 1.0 - 2.0 * (x2 + z2) * sq;
    m[6] = 2.0 * (y * z * sq + x * sc);
    m[8] = 2.0 * (x * z * sq + y * sc);
    m[9] = 2.0 * (y * z * sq - x * sc);
    m[10] = 1.0 - 2.0 * (x2 + y2) * sq;
    DomMatrixReadOnly::from_3d(m)
}

/// Horizontal skew: `m21 = tan(degrees)`.
pub(crate) fn skewing_x(degrees: f64) -> DomMatrixReadOnly {
    DomMatrixReadOnly::from_2d(1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0)
}

/// Vertical skew: `m12 = tan(degrees)`.
pub(crate) fn skewing_y(degrees: f64) -> DomMatrixReadOnly {
    DomMatrixReadOnly::from_2d(1.0, degrees.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
}

pub(crate) fn flipping_x() -> DomMatrixReadOnly {
    DomMatrixReadOnly::from_2d(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
}

pub(crate) fn flipping_y() -> DomMatrixReadOnly {
    DomMatrixReadOnly::from_2d(1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::Matrix4;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample(seed: f64) -> DomMatrixReadOnly {
        let values: Vec<f64> = (0..16)
            .map(|i| ((f64::from(i) + 1.0) * seed).sin() * 3.0)
            .collect();
        DomMatrixReadOnly::from_sequence(&values).unwrap()
    }

    #[test]
    fn compose_with_identity_is_noop() {
        let a = sample(0.7);
        let id = DomMatrixReadOnly::identity();
        assert_eq!(compose(&a, &id).m, a.m);
        assert_eq!(compose(&id, &a).m, a.m);
    }

    #[test]
    fn compose_keeps_translation_in_row_four() {
        let t = compose(&DomMatrixReadOnly::identity(), &translation(3.0, 4.0, 0.0));
        assert_eq!((t.m41(), t.m42(), t.m14(), t.m24()), (3.0, 4.0, 0.0, 0.0));
        assert!(t.is_2d());
    }

    #[test]
    fn compose_applies_right_operand_first() {
        // Scale then translate: (1, 1) -> (2, 2) -> (12, 2).
        let m = compose(&translation(10.0, 0.0, 0.0), &scaling(2.0, 2.0, 1.0));
        let p = m.transform_point(&crate::geometry::DomPointReadOnly::new(1.0, 1.0, 0.0, 1.0));
        assert_abs_diff_eq!(p.x(), 12.0);
        assert_abs_diff_eq!(p.y(), 2.0);
    }

    #[test]
    fn compose_is_associative() {
        let (a, b, c) = (sample(0.3), sample(1.1), sample(2.9));
        let left = compose(&compose(&a, &b), &c);
        let right = compose(&a, &compose(&b, &c));
        for i in 0..16 {
            assert_relative_eq!(left.m[i], right.m[i], epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn compose_matches_nalgebra_product() {
        let (a, b) = (sample(0.5), sample(1.7));
        let expected: Matrix4 = a.to_nalgebra() * b.to_nalgebra();
        assert_relative_eq!(compose(&a, &b).to_nalgebra(), expected, epsilon = 1e-12);
    }

    #[test]
    fn compose_is_not_commutative() {
        let t = translation(5.0, 0.0, 0.0);
        let s = scaling(2.0, 1.0, 1.0);
        assert_ne!(compose(&t, &s).m41(), compose(&s, &t).m41());
    }

    #[test]
    fn compose_2d_flag_is_conjunction() {
        let two = scaling(2.0, 2.0, 1.0);
        let three = translation(0.0, 0.0, 1.0);
        assert!(compose(&two, &two).is_2d());
        assert!(!compose(&two, &three).is_2d());
        assert!(!compose(&three, &two).is_2d());
    }

    #[test]
    fn elementary_classification() {
        assert!(translation(1.0, 2.0, 0.0).is_2d());
        assert!(!translation(1.0, 2.0, 3.0).is_2d());
        assert!(scaling(2.0, 3.0, 1.0).is_2d());
        assert!(!scaling(2.0, 3.0, 4.0).is_2d());
        assert!(rotation(0.0, 0.0, 1.0, 30.0).is_2d());
        assert!(!rotation(1.0, 0.0, 0.0, 30.0).is_2d());
    }

    #[test]
    fn z_rotation_is_standard_2d_form() {
        let r = rotation(0.0, 0.0, 1.0, 30.0);
        let theta = 30f64.to_radians();
        assert_abs_diff_eq!(r.a(), theta.cos(), epsilon = 1e-15);
        assert_abs_diff_eq!(r.b(), theta.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(r.c(), -theta.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(r.d(), theta.cos(), epsilon = 1e-15);
        assert_eq!(r.m33(), 1.0);
    }

    #[test]
    fn x_rotation_turns_y_into_z() {
        let r = rotation(1.0, 0.0, 0.0, 90.0);
        let p = r.transform_point(&crate::geometry::DomPointReadOnly::new(0.0, 1.0, 0.0, 1.0));
        assert_abs_diff_eq!(p.y(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn generic_axis_matches_nalgebra_rotation() {
        let axis = nalgebra::Vector3::new(1.0, 2.0, 2.0) / 3.0;
        let r = rotation(axis.x, axis.y, axis.z, 40.0);
        let expected = nalgebra::Rotation3::from_axis_angle(
            &nalgebra::Unit::new_normalize(axis),
            40f64.to_radians(),
        )
        .to_homogeneous();
        assert_relative_eq!(r.to_nalgebra(), expected, epsilon = 1e-12);
    }

    #[test]
    fn skew_and_flip_components() {
        assert_abs_diff_eq!(skewing_x(45.0).m21(), 1.0, epsilon = 1e-15);
        assert_eq!(skewing_x(45.0).m12(), 0.0);
        assert_abs_diff_eq!(skewing_y(45.0).m12(), 1.0, epsilon = 1e-15);
        assert_eq!(flipping_x().m11(), -1.0);
        assert_eq!(flipping_y().m22(), -1.0);
        assert!(flipping_x().is_2d());
    }
}
