//! Error type for structural misuse of the engine.
//!
//! Statistical shortfalls (too few training samples, uniform images) are not
//! errors; they degrade silently.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LivewireError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("image dimensions must be set before pixel data")]
    DimensionsNotSet,

    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("no pixel data loaded")]
    NoImageData,

    #[error("no search session; set a seed point first")]
    NoSession,

    #[error("point ({x}, {y}) is outside the {width}x{height} grid")]
    PointOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid scissors parameters: {0}")]
    InvalidParams(String),

    #[error("cannot pop from an empty bucket queue")]
    EmptyQueue,
}
