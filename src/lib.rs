pub mod error;
pub mod geometry;
pub mod math;
pub mod matrix;

pub use error::{GeometryError, InitError, Result};
pub use geometry::{
    DomPoint, DomPointInit, DomPointReadOnly, DomQuad, DomQuadInit, DomRect, DomRectInit,
    DomRectReadOnly,
};
pub use matrix::{compose, DomMatrix, DomMatrix2DInit, DomMatrixInit, DomMatrixReadOnly};
