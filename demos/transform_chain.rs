//! Builds a small transform chain, maps a quad through it and inverts it back.
//!
//! Usage:
//! ```text
//! cargo run --example transform_chain
//! RUST_LOG=canvas_geometry=debug cargo run --example transform_chain
//! ```

use canvas_geometry::{DomMatrixInit, DomMatrixReadOnly, DomQuad, DomRectInit, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("canvas_geometry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let matrix = DomMatrixReadOnly::identity()
        .translate(50.0, 20.0, 0.0)
        .rotate(30.0)
        .scale(2.0, 2.0, 1.0, 0.0, 0.0, 0.0)
        .into_read_only();
    tracing::info!(css = %matrix.to_css_string()?, "composed matrix");

    let quad = DomQuad::from_rect(&DomRectInit {
        x: Some(0.0),
        y: Some(0.0),
        width: Some(10.0),
        height: Some(5.0),
    });
    let mapped = DomQuad::new(
        matrix.transform_point(quad.p1()),
        matrix.transform_point(quad.p2()),
        matrix.transform_point(quad.p3()),
        matrix.transform_point(quad.p4()),
    );
    tracing::info!(bounds = ?mapped.bounds(), "mapped quad");

    let inverse = matrix.inverse();
    let back = inverse.transform_point(mapped.p3());
    tracing::info!(x = back.x(), y = back.y(), "corner mapped back");

    // Singular input yields NaNs rather than an error.
    let flat = DomMatrixReadOnly::from_matrix(&DomMatrixInit {
        d: Some(0.0),
        ..DomMatrixInit::default()
    })?;
    tracing::info!(json = %flat.inverse().to_json(), "singular inverse");

    Ok(())
}
