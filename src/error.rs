//! Error types for setting up the demo.

use thiserror::Error;

/// Errors that can occur while validating `DemoOptions` or building a `DemoState`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// Recursive subdivision deeper than the supported limit.
    #[error("subdivision depth {depth} exceeds the maximum of {max}")]
    DivideDepthTooLarge {
        /// Requested depth.
        depth: usize,
        /// Largest supported depth.
        max: usize,
    },

    /// No uniformly sampled approximation to draw.
    #[error("at least one uniform sampling layer is required")]
    NoSampleLayers,

    /// More uniformly sampled approximations than `MAX_SAMPLE_LAYERS`.
    #[error("no room for more than {max} uniform sampling layers")]
    TooManySampleLayers {
        /// Capacity of the layer list.
        max: usize,
    },
}

/// Result type for demo setup.
pub type Result<T> = core::result::Result<T, DemoError>;
