//! Error types for palletpack.

use thiserror::Error;

/// Result type alias for palletpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before or during a packing search.
///
/// Boxes that do not fit are never reported here; they end up in the
/// not-packed list of the returned pallet.
#[derive(Debug, Error)]
pub enum Error {
    /// A box with a non-positive dimension or an overflowing volume was
    /// supplied.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The pallet has a non-positive dimension or an overflowing volume.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Computation cancelled before any attempt completed.
    #[error("Computation cancelled")]
    Cancelled,
}
