//! Error handling for Blockboard
//!
//! Every fallible layout operation reports a [`LayoutError`]:
//! - Placement errors (no free slot, bad dimensions)
//! - Editor contract errors (unknown block, stale guide handle)
//! - Transform errors (invalid scale factor)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Errors are local to the operation that raised them: a failed call leaves
/// the block store and the guide pool exactly as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The placement scan ran off the canvas without finding a free slot
    #[error("No free slot for a {width}x{height} block")]
    LayoutExhausted {
        /// Requested block width.
        width: f64,
        /// Requested block height.
        height: f64,
    },

    /// Block dimensions must be finite and positive
    #[error("Invalid block dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested block width.
        width: f64,
        /// Requested block height.
        height: f64,
    },

    /// Scale factors must be finite and positive
    #[error("Invalid scale factor: {0}")]
    InvalidScale(f64),

    /// An event referenced a block that is not in the store
    #[error("Unknown block id: {0}")]
    UnknownBlock(u64),

    /// A guide direction tag outside the fixed set of eight
    #[error("Unknown snap direction: {0}")]
    UnknownDirection(String),

    /// A guide handle that was never issued by this pool
    #[error("Stale guide handle: {0}")]
    StaleHandle(usize),

    /// Editor or planner settings that would make layout ill-defined
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Check if this error came from the placement planner
    pub fn is_placement_error(&self) -> bool {
        matches!(
            self,
            LayoutError::LayoutExhausted { .. } | LayoutError::InvalidDimensions { .. }
        )
    }

    /// Check if this error is a caller contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            LayoutError::UnknownBlock(_)
                | LayoutError::UnknownDirection(_)
                | LayoutError::StaleHandle(_)
        )
    }
}

/// Result type using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
