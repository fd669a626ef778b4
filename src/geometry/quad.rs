use serde::{Deserialize, Serialize};

use super::point::{DomPoint, DomPointInit, DomPointReadOnly};
use super::rect::{DomRectInit, DomRectReadOnly};
use crate::math::{nan_max, nan_min};

/// Partially-specified quad. Missing corners default to the origin point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomQuadInit {
    pub p1: Option<DomPointInit>,
    pub p2: Option<DomPointInit>,
    pub p3: Option<DomPointInit>,
    pub p4: Option<DomPointInit>,
}

/// Four independently owned corner points.
///
/// Corners need not be coplanar or ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomQuad {
    p1: DomPoint,
    p2: DomPoint,
    p3: DomPoint,
    p4: DomPoint,
}

impl DomQuad {
    /// Creates a quad from four corners.
    #[must_use]
    pub fn new(p1: DomPoint, p2: DomPoint, p3: DomPoint, p4: DomPoint) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Builds the quad spanning `rect`, clockwise from its origin corner.
    ///
    /// Uses the raw (possibly negative) width and height.
    #[must_use]
    pub fn from_rect(rect: &DomRectInit) -> Self {
        let r = DomRectReadOnly::from_rect(rect);
        let (x, y, w, h) = (r.x(), r.y(), r.width(), r.height());
        Self::new(
            DomPoint::new(x, y, 0.0, 1.0),
            DomPoint::new(x + w, y, 0.0, 1.0),
            DomPoint::new(x + w, y + h, 0.0, 1.0),
            DomPoint::new(x, y + h, 0.0, 1.0),
        )
    }

    /// Copies each corner of `init`, defaulting unspecified ones to the origin.
    #[must_use]
    pub fn from_quad(init: &DomQuadInit) -> Self {
        let corner = |p: Option<DomPointInit>| DomPoint::from_point(&p.unwrap_or_default());
        Self::new(
            corner(init.p1),
            corner(init.p2),
            corner(init.p3),
            corner(init.p4),
        )
    }

    /// First corner; `p2`..`p4` follow clockwise for rect-built quads.
    #[must_use]
    pub fn p1(&self) -> &DomPoint {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &DomPoint {
        &self.p2
    }

    #[must_use]
    pub fn p3(&self) -> &DomPoint {
        &self.p3
    }

    #[must_use]
    pub fn p4(&self) -> &DomPoint {
        &self.p4
    }

    /// Mutable access to a corner. Corners are independent of each other.
    pub fn p1_mut(&mut self) -> &mut DomPoint {
        &mut self.p1
    }

    pub fn p2_mut(&mut self) -> &mut DomPoint {
        &mut self.p2
    }

    pub fn p3_mut(&mut self) -> &mut DomPoint {
        &mut self.p3
    }

    pub fn p4_mut(&mut self) -> &mut DomPoint {
        &mut self.p4
    }

    fn corners(&self) -> [&DomPointReadOnly; 4] {
        [&*self.p1, &*self.p2, &*self.p3, &*self.p4]
    }

    /// Returns the smallest rectangle containing all four corners.
    ///
    /// A NaN coordinate makes the affected extents NaN.
    #[must_use]
    pub fn bounds(&self) -> DomRectReadOnly {
        let corners = self.corners();
        let xs = corners.map(DomPointReadOnly::x);
        let ys = corners.map(DomPointReadOnly::y);
        let left = xs.into_iter().reduce(nan_min).unwrap_or(f64::NAN);
        let top = ys.into_iter().reduce(nan_min).unwrap_or(f64::NAN);
        let right = xs.into_iter().reduce(nan_max).unwrap_or(f64::NAN);
        let bottom = ys.into_iter().reduce(nan_max).unwrap_or(f64::NAN);
        DomRectReadOnly::new(left, top, right - left, bottom - top)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> DomRectInit {
        DomRectInit {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
        }
    }

    #[test]
    fn from_rect_orders_corners_clockwise() {
        let q = DomQuad::from_rect(&rect(1.0, 2.0, 3.0, 4.0));
        assert_eq!((q.p1().x(), q.p1().y()), (1.0, 2.0));
        assert_eq!((q.p2().x(), q.p2().y()), (4.0, 2.0));
        assert_eq!((q.p3().x(), q.p3().y()), (4.0, 6.0));
        assert_eq!((q.p4().x(), q.p4().y()), (1.0, 6.0));
    }

    #[test]
    fn bounds_of_rect_quad_is_rect() {
        let b = DomQuad::from_rect(&rect(0.0, 0.0, 10.0, 20.0)).bounds();
        assert_eq!(b, DomRectReadOnly::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn bounds_normalizes_negative_rect() {
        let b = DomQuad::from_rect(&rect(10.0, 10.0, -5.0, -5.0)).bounds();
        assert_eq!(b, DomRectReadOnly::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn from_quad_defaults_missing_corners() {
        let q = DomQuad::from_quad(&DomQuadInit {
            p3: Some(DomPointInit::new(5.0, 6.0, 0.0, 1.0)),
            ..DomQuadInit::default()
        });
        assert_eq!(**q.p1(), DomPointReadOnly::default());
        assert_eq!(q.p3().x(), 5.0);
        assert_eq!(q.bounds(), DomRectReadOnly::new(0.0, 0.0, 5.0, 6.0));
    }

    #[test]
    fn bounds_of_skewed_quad() {
        let q = DomQuad::new(
            DomPoint::new(0.0, 1.0, 0.0, 1.0),
            DomPoint::new(3.0, -2.0, 0.0, 1.0),
            DomPoint::new(1.0, 4.0, 0.0, 1.0),
            DomPoint::new(-1.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(q.bounds(), DomRectReadOnly::new(-1.0, -2.0, 4.0, 6.0));
    }

    #[test]
    fn bounds_propagates_nan() {
        let mut q = DomQuad::default();
        q.p2_mut().set_x(f64::NAN);
        let b = q.bounds();
        assert!(b.x().is_nan());
        assert!(b.width().is_nan());
        assert_eq!(b.y(), 0.0);
        assert!(b.left().is_nan());
        assert_eq!(b.top(), 0.0);
    }

    #[test]
    fn corners_are_independent() {
        let mut q = DomQuad::default();
        q.p1_mut().set_y(9.0);
        assert_eq!(q.p1().y(), 9.0);
        assert_eq!(q.p2().y(), 0.0);
    }
}
