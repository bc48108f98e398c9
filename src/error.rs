use thiserror::Error;

/// Result type for construction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported while building surfaces, expressions, or cells.
///
/// Queries never return these; a miss is an `Option::None`, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("cone half-angle must lie strictly between 0 and pi/2, got {0}")]
    HalfAngleOutOfRange(f64),

    #[error("direction vector must be finite and non-zero")]
    DegenerateDirection,

    #[error("only planes may carry a reflective boundary")]
    ReflectiveUnsupported,

    #[error("expression syntax error: {0}")]
    ExpressionSyntax(String),

    #[error("expression references region {index}, but the cell has {count} regions")]
    RegionIndexOutOfRange { index: usize, count: usize },
}
