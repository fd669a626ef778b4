pub mod point;
pub mod quad;
pub mod rect;

pub use point::{DomPoint, DomPointInit, DomPointReadOnly};
pub use quad::{DomQuad, DomQuadInit};
pub use rect::{DomRect, DomRectInit, DomRectReadOnly};
