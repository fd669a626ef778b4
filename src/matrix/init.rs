//! Reconciliation of partially-specified matrix dictionaries.
//!
//! A dictionary may name the 2D components twice, once by shorthand
//! (`a`..`f`) and once by full name (`m11`, `m12`, `m21`, `m22`, `m41`,
//! `m42`). Fixup checks that every pair agrees, then fills each full field
//! from whichever name is present, defaulting to the identity.

use serde::{Deserialize, Serialize};

use super::{DomMatrixReadOnly, IDENTITY};
use crate::error::{InitError, Result};
use crate::math::same_value_zero;

/// Partially-specified 2D matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomMatrix2DInit {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
    pub m11: Option<f64>,
    pub m12: Option<f64>,
    pub m21: Option<f64>,
    pub m22: Option<f64>,
    pub m41: Option<f64>,
    pub m42: Option<f64>,
}

/// Partially-specified 3D matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomMatrixInit {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub e: Option<f64>,
    pub f: Option<f64>,
    pub m11: Option<f64>,
    pub m12: Option<f64>,
    pub m13: Option<f64>,
    pub m14: Option<f64>,
    pub m21: Option<f64>,
    pub m22: Option<f64>,
    pub m23: Option<f64>,
    pub m24: Option<f64>,
    pub m31: Option<f64>,
    pub m32: Option<f64>,
    pub m33: Option<f64>,
    pub m34: Option<f64>,
    pub m41: Option<f64>,
    pub m42: Option<f64>,
    pub m43: Option<f64>,
    pub m44: Option<f64>,
    #[serde(rename = "is2D")]
    pub is_2d: Option<bool>,
}

/// Resolved 2D fields in `a, b, c, d, e, f` order.
type Fields2D = [f64; 6];

const ALIASES: [(&str, &str, f64); 6] = [
    ("a", "m11", 1.0),
    ("b", "m12", 0.0),
    ("c", "m21", 0.0),
    ("d", "m22", 1.0),
    ("e", "m41", 0.0),
    ("f", "m42", 0.0),
];

/// Checks each `(alias, full)` pair and resolves it to a single value.
fn reconcile_2d(aliases: [Option<f64>; 6], full: [Option<f64>; 6]) -> Result<Fields2D> {
    let mut out = [0.0; 6];
    for (i, &(alias_name, full_name, default)) in ALIASES.iter().enumerate() {
        out[i] = match (aliases[i], full[i]) {
            (Some(alias_value), Some(full_value)) => {
                if !same_value_zero(alias_value, full_value) {
                    tracing::debug!(alias_name, alias_value, full_name, full_value, "matrix init rejected");
                    return Err(InitError::AliasMismatch {
                        alias: alias_name,
                        alias_value,
                        full: full_name,
                        full_value,
                    }
                    .into());
                }
                full_value
            }
            (_, Some(v)) | (Some(v), None) => v,
            (None, None) => default,
        };
    }
    Ok(out)
}

impl DomMatrix2DInit {
    /// Validates alias agreement and fills every field.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`](crate::GeometryError::InvalidMatrix)
    /// if a shorthand field and its full name are both present but differ.
    pub fn validate_and_fixup(&self) -> Result<Self> {
        let [a, b, c, d, e, f] = reconcile_2d(
            [self.a, self.b, self.c, self.d, self.e, self.f],
            [self.m11, self.m12, self.m21, self.m22, self.m41, self.m42],
        )?;
        Ok(Self {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            d: Some(d),
            e: Some(e),
            f: Some(f),
            m11: Some(a),
            m12: Some(b),
            m21: Some(c),
            m22: Some(d),
            m41: Some(e),
            m42: Some(f),
        })
    }

    /// Builds the matrix from already fixed-up fields.
    pub(crate) fn to_matrix(self) -> DomMatrixReadOnly {
        DomMatrixReadOnly::from_2d(
            self.m11.unwrap_or(1.0),
            self.m12.unwrap_or(0.0),
            self.m21.unwrap_or(0.0),
            self.m22.unwrap_or(1.0),
            self.m41.unwrap_or(0.0),
            self.m42.unwrap_or(0.0),
        )
    }
}

impl DomMatrixInit {
    fn three_d_only(&self) -> [(&'static str, Option<f64>, f64); 10] {
        [
            ("m13", self.m13, IDENTITY[2]),
            ("m14", self.m14, IDENTITY[3]),
            ("m23", self.m23, IDENTITY[6]),
            ("m24", self.m24, IDENTITY[7]),
            ("m31", self.m31, IDENTITY[8]),
            ("m32", self.m32, IDENTITY[9]),
            ("m33", self.m33, IDENTITY[10]),
            ("m34", self.m34, IDENTITY[11]),
            ("m43", self.m43, IDENTITY[14]),
            ("m44", self.m44, IDENTITY[15]),
        ]
    }

    /// Validates the dictionary and fills every field, including `is_2d`.
    ///
    /// The 2D fields are reconciled as in [`DomMatrix2DInit::validate_and_fixup`].
    /// Absent 3D-only fields take their identity values. An absent `is_2d`
    /// is inferred from whether every 3D-only field is at its identity value.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMatrix`](crate::GeometryError::InvalidMatrix)
    /// if aliased fields disagree, or if `is_2d` is `Some(true)` while a
    /// 3D-only field is off its identity value.
    #[allow(clippy::float_cmp)]
    pub fn validate_and_fixup(&self) -> Result<Self> {
        let [a, b, c, d, e, f] = reconcile_2d(
            [self.a, self.b, self.c, self.d, self.e, self.f],
            [self.m11, self.m12, self.m21, self.m22, self.m41, self.m42],
        )?;

        let off_identity = self
            .three_d_only()
            .into_iter()
            .find_map(|(name, value, identity)| match value {
                Some(v) if v != identity => Some((name, v)),
                _ => None,
            });

        let is_2d = match (self.is_2d, off_identity) {
            (Some(true), Some((field, value))) => {
                tracing::debug!(field, value, "matrix init claims is2D with a 3D component");
                return Err(InitError::Not2D { field, value }.into());
            }
            (Some(flag), _) => flag,
            (None, found) => found.is_none(),
        };

        let fill = |value: Option<f64>, identity: f64| Some(value.unwrap_or(identity));
        Ok(Self {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            d: Some(d),
            e: Some(e),
            f: Some(f),
            m11: Some(a),
            m12: Some(b),
            m13: fill(self.m13, 0.0),
            m14: fill(self.m14, 0.0),
            m21: Some(c),
            m22: Some(d),
            m23: fill(self.m23, 0.0),
            m24: fill(self.m24, 0.0),
            m31: fill(self.m31, 0.0),
            m32: fill(self.m32, 0.0),
            m33: fill(self.m33, 1.0),
            m34: fill(self.m34, 0.0),
            m41: Some(e),
            m42: Some(f),
            m43: fill(self.m43, 0.0),
            m44: fill(self.m44, 1.0),
            is_2d: Some(is_2d),
        })
    }

    /// Builds the matrix from already fixed-up fields.
    pub(crate) fn to_matrix(self) -> DomMatrixReadOnly {
        let o = |value: Option<f64>, identity: f64| value.unwrap_or(identity);
        let m = [
            o(self.m11, 1.0), o(self.m12, 0.0), o(self.m13, 0.0), o(self.m14, 0.0),
            o(self.m21, 0.0), o(self.m22, 1.0), o(self.m23, 0.0), o(self.m24, 0.0),
            o(self.m31, 0.0), o(self.m32, 0.0), o(self.m33, 1.0), o(self.m34, 0.0),
            o(self.m41, 0.0), o(self.m42, 0.0), o(self.m43, 0.0), o(self.m44, 1.0),
        ];
        if self.is_2d.unwrap_or(false) {
            DomMatrixReadOnly::from_2d(m[0], m[1], m[4], m[5], m[12], m[13])
        } else {
            DomMatrixReadOnly::from_3d(m)
        }
    }
}

impl From<DomMatrix2DInit> for DomMatrixInit {
    fn from(init: DomMatrix2DInit) -> Self {
        Self {
            a: init.a,
            b: init.b,
            c: init.c,
            d: init.d,
            e: init.e,
            f: init.f,
            m11: init.m11,
            m12: init.m12,
            m21: init.m21,
            m22: init.m22,
            m41: init.m41,
            m42: init.m42,
            ..Self::default()
        }
    }
}
