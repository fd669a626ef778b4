use super::{has_2d_shape, DomMatrix, DomMatrixReadOnly};
use crate::error::{GeometryError, Result};
use crate::math::Matrix4;

/// Shortest round-trip form; integers print without a fraction and `-0` as `0`.
#[allow(clippy::float_cmp)]
fn format_component(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    v.to_string()
}

impl DomMatrixReadOnly {
    /// CSS transform function form: `matrix(a, b, c, d, e, f)` for 2D
    /// matrices, `matrix3d(m11, .., m44)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotFinite`] if any component is NaN or infinite.
    pub fn to_css_string(&self) -> Result<String> {
        if self.m.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NotFinite);
        }
        let (name, values): (&str, Vec<f64>) = if self.is_2d {
            ("matrix", vec![self.a(), self.b(), self.c(), self.d(), self.e(), self.f()])
        } else {
            ("matrix3d", self.m.to_vec())
        };
        let args: Vec<String> = values.into_iter().map(format_component).collect();
        Ok(format!("{name}({})", args.join(", ")))
    }

    /// Row-major components narrowed to single precision.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_float32_array(&self) -> [f32; 16] {
        self.m.map(|v| v as f32)
    }

    /// Row-major components `m11..m44`.
    #[must_use]
    pub fn to_float64_array(&self) -> [f64; 16] {
        self.m
    }

    /// JSON form with every component, `is2D` and `isIdentity`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "a": self.a(), "b": self.b(), "c": self.c(),
            "d": self.d(), "e": self.e(), "f": self.f(),
            "m11": self.m11(), "m12": self.m12(), "m13": self.m13(), "m14": self.m14(),
            "m21": self.m21(), "m22": self.m22(), "m23": self.m23(), "m24": self.m24(),
            "m31": self.m31(), "m32": self.m32(), "m33": self.m33(), "m34": self.m34(),
            "m41": self.m41(), "m42": self.m42(), "m43": self.m43(), "m44": self.m44(),
            "is2D": self.is_2d,
            "isIdentity": self.is_identity(),
        })
    }

    /// Column-vector form: `to_nalgebra() * (x, y, z, w)` equals
    /// [`transform_point`](Self::transform_point).
    #[must_use]
    pub fn to_nalgebra(&self) -> Matrix4 {
        Matrix4::from_column_slice(&self.m)
    }
}

impl From<&Matrix4> for DomMatrixReadOnly {
    /// Classified as 2D when every 3D-only component is at its identity value.
    fn from(n: &Matrix4) -> Self {
        let mut m = [0.0; 16];
        m.copy_from_slice(n.as_slice());
        Self {
            m,
            is_2d: has_2d_shape(&m),
        }
    }
}

impl From<&Matrix4> for DomMatrix {
    fn from(n: &Matrix4) -> Self {
        DomMatrix::from(DomMatrixReadOnly::from(n))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::geometry::DomPointReadOnly;
    use crate::math::Vector4;
    use approx::assert_relative_eq;

    #[test]
    fn css_string_2d() {
        let m = DomMatrixReadOnly::from_2d(1.0, 0.0, -0.0, 2.5, 10.0, -3.0);
        assert_eq!(m.to_css_string().unwrap(), "matrix(1, 0, 0, 2.5, 10, -3)");
    }

    #[test]
    fn css_string_3d() {
        let m = DomMatrixReadOnly::identity().translate(0.0, 0.0, 4.0);
        assert_eq!(
            m.to_css_string().unwrap(),
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 4, 1)"
        );
    }

    #[test]
    fn css_string_rejects_non_finite() {
        let singular = DomMatrixReadOnly::from_2d(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).inverse();
        assert_eq!(singular.to_css_string(), Err(GeometryError::NotFinite));
    }

    #[test]
    fn float_arrays_are_row_major() {
        let values: Vec<f64> = (1..=16).map(f64::from).collect();
        let m = DomMatrixReadOnly::from_sequence(&values).unwrap();
        assert_eq!(m.to_float64_array().to_vec(), values);
        assert_eq!(m.to_float32_array()[13], 14.0);
    }

    #[test]
    fn json_contains_flags() {
        let json = DomMatrixReadOnly::identity().scale_non_uniform(2.0, 1.0).to_json();
        assert_eq!(json["a"], 2.0);
        assert_eq!(json["m11"], 2.0);
        assert_eq!(json["is2D"], true);
        assert_eq!(json["isIdentity"], false);
    }

    #[test]
    fn nalgebra_product_matches_transform_point() {
        let m = DomMatrixReadOnly::identity()
            .translate(1.0, 2.0, 3.0)
            .rotate_axis_angle(1.0, 2.0, 3.0, 33.0)
            .scale(2.0, 3.0, 4.0, 0.5, 0.0, 1.0);
        let p = DomPointReadOnly::new(0.3, -1.2, 2.0, 1.0);
        let expected = m.to_nalgebra() * Vector4::from(p);
        let got: Vector4 = m.transform_point(&p).into_read_only().into();
        assert_relative_eq!(got, expected, epsilon = 1e-12);
    }

    #[test]
    fn from_nalgebra_roundtrip_and_classification() {
        let m = DomMatrixReadOnly::identity().translate(4.0, 5.0, 0.0);
        let back = DomMatrixReadOnly::from(&m.to_nalgebra());
        assert_eq!(back.m, m.m);
        assert!(back.is_2d());
        let three = DomMatrix::from(&Matrix4::new_scaling(2.0));
        assert!(!three.is_2d());
    }
}
