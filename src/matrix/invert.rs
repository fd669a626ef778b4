use super::{DomMatrix, DomMatrixReadOnly};

/// Adjugate of a row-major 4x4 matrix by cofactor expansion.
///
/// The inverse of the transpose is the transpose of the inverse, so the same
/// formulas hold for either storage order.
#[rustfmt::skip]
fn adjugate(m: &[f64; 16]) -> [f64; 16] {
    let mut inv = [0.0; 16];
    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];
    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];
    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];
    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];
    inv
}

/// First-row cofactor expansion, reusing the adjugate's first column.
fn expand_determinant(m: &[f64; 16], adj: &[f64; 16]) -> f64 {
    m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

impl DomMatrixReadOnly {
    /// Determinant of the full 4x4 matrix.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        expand_determinant(&self.m, &adjugate(&self.m))
    }

    /// Returns the inverse of this matrix.
    ///
    /// A singular matrix (determinant exactly zero) inverts to a matrix of
    /// sixteen NaNs classified as 3D. Otherwise the 2D classification is
    /// carried over from the input.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> DomMatrix {
        let adj = adjugate(&self.m);
        let det = expand_determinant(&self.m, &adj);
        if det == 0.0 {
            tracing::debug!(is_2d = self.is_2d, "inverting singular matrix");
            return DomMatrix::from(DomMatrixReadOnly {
                m: [f64::NAN; 16],
                is_2d: false,
            });
        }
        DomMatrix::from(DomMatrixReadOnly {
            m: adj.map(|v| v / det),
            is_2d: self.is_2d,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::matrix::compose;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn assert_near_identity(m: &DomMatrixReadOnly) {
        let id = DomMatrixReadOnly::identity();
        for i in 0..16 {
            assert!((m.m[i] - id.m[i]).abs() < TOLERANCE, "m[{i}] = {}", m.m[i]);
        }
    }

    fn sample_3d() -> DomMatrixReadOnly {
        DomMatrixReadOnly::from_sequence(&[
            2.0, 0.5, 0.0, 0.1, //
            -1.0, 3.0, 0.2, 0.0, //
            0.3, 0.0, 1.5, 0.0, //
            4.0, -2.0, 7.0, 1.0,
        ])
        .unwrap()
    }

    #[test]
    fn inverse_composes_to_identity() {
        let a = sample_3d();
        let inv = a.inverse();
        assert_near_identity(&compose(&a, &inv));
        assert_near_identity(&compose(&inv, &a));
        assert!(!inv.is_2d());
    }

    #[test]
    fn inverse_matches_nalgebra() {
        let a = sample_3d();
        let expected = a.to_nalgebra().try_inverse().unwrap();
        assert_relative_eq!(a.inverse().to_nalgebra(), expected, epsilon = 1e-12);
    }

    #[test]
    fn determinant_matches_nalgebra() {
        let a = sample_3d();
        assert_relative_eq!(a.determinant(), a.to_nalgebra().determinant(), epsilon = 1e-12);
        assert_eq!(DomMatrixReadOnly::identity().determinant(), 1.0);
    }

    #[test]
    fn inverse_of_2d_stays_2d() {
        let a = DomMatrixReadOnly::identity()
            .translate(3.0, 4.0, 0.0)
            .rotate(30.0)
            .scale_non_uniform(2.0, 0.5);
        let inv = a.inverse();
        assert!(inv.is_2d());
        assert_near_identity(&compose(&a, &inv));
    }

    #[test]
    fn singular_matrix_inverts_to_nan() {
        let flat = DomMatrixReadOnly::from_2d(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        assert_eq!(flat.determinant(), 0.0);
        let inv = flat.inverse();
        assert!(inv.m.iter().all(|v| v.is_nan()));
        assert!(!inv.is_2d());
    }

    #[test]
    fn invert_self_in_place() {
        let mut m = DomMatrix::new();
        m.translate_self(5.0, -3.0, 0.0).invert_self();
        assert_eq!((m.m41(), m.m42()), (-5.0, 3.0));
        assert!(m.is_2d());
    }
}
