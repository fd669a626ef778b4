use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::math::{nan_max, nan_min};

/// Partially-specified rectangle. Missing fields default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomRectInit {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// An axis-aligned box stored as origin plus (possibly negative) size.
///
/// The edges `top`, `right`, `bottom`, `left` are derived on every read, so
/// a negative width or height simply swaps which side the origin lies on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomRectReadOnly {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl DomRectReadOnly {
    /// Creates a rectangle, storing every value verbatim.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from a dictionary.
    #[must_use]
    pub fn from_rect(init: &DomRectInit) -> Self {
        Self::new(
            init.x.unwrap_or(0.0),
            init.y.unwrap_or(0.0),
            init.width.unwrap_or(0.0),
            init.height.unwrap_or(0.0),
        )
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
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Smaller of `y` and `y + height`. NaN if either is NaN.
    #[must_use]
    pub fn top(&self) -> f64 {
        nan_min(self.y, self.y + self.height)
    }

    /// Larger of `x` and `x + width`.
    #[must_use]
    pub fn right(&self) -> f64 {
        nan_max(self.x, self.x + self.width)
    }

    /// Larger of `y` and `y + height`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        nan_max(self.y, self.y + self.height)
    }

    /// Smaller of `x` and `x + width`.
    #[must_use]
    pub fn left(&self) -> f64 {
        nan_min(self.x, self.x + self.width)
    }

}

impl From<DomRectReadOnly> for DomRectInit {
    fn from(r: DomRectReadOnly) -> Self {
        Self {
            x: Some(r.x),
            y: Some(r.y),
            width: Some(r.width),
            height: Some(r.height),
        }
    }
}

/// Mutable rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomRect {
    inner: DomRectReadOnly,
}

impl DomRect {
    /// Creates a mutable rectangle, storing every value verbatim.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            inner: DomRectReadOnly::new(x, y, width, height),
        }
    }

    /// Builds a mutable rectangle from a dictionary.
    #[must_use]
    pub fn from_rect(init: &DomRectInit) -> Self {
        Self {
            inner: DomRectReadOnly::from_rect(init),
        }
    }

    pub fn set_x(&mut self, x: f64) {
        self.inner.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.inner.y = y;
    }

    pub fn set_width(&mut self, width: f64) {
        self.inner.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.inner.height = height;
    }

    #[must_use]
    pub fn into_read_only(self) -> DomRectReadOnly {
        self.inner
    }
}

impl Deref for DomRect {
    type Target = DomRectReadOnly;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<DomRectReadOnly> for DomRect {
    fn from(inner: DomRectReadOnly) -> Self {
        Self { inner }
    }
}
