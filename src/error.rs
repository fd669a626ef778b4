use thiserror::Error;

/// Top-level error type for the geometry primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid matrix length {len}: expected 6 or 16 components")]
    InvalidLength { len: usize },

    #[error(transparent)]
    InvalidMatrix(#[from] InitError),

    #[error("matrix contains non-finite components")]
    NotFinite,
}

/// Reasons a matrix init dictionary fails reconciliation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error("conflicting matrix fields: {alias} = {alias_value} but {full} = {full_value}")]
    AliasMismatch {
        alias: &'static str,
        alias_value: f64,
        full: &'static str,
        full_value: f64,
    },

    #[error("is2D is true but {field} = {value}")]
    Not2D { field: &'static str, value: f64 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
