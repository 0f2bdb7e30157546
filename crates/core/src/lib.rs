//! # palletpack Core
//!
//! Core value types and traits for the palletpack layer packing engine.
//!
//! ## Core Components
//!
//! - **Dimensions**: [`Dim3`], an integer vector used for sizes and locations,
//!   with the fixed axis permutations the packer searches over
//! - **Placement**: [`PackingData`], the orientation and location of a packed box
//! - **Solver trait**: Common interface and [`Config`] for packing solvers
//! - **Summary**: [`PackSummary`] for reporting
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod dimension;
pub mod error;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use dimension::{Dim3, ROTATION_COUNT};
pub use error::{Error, Result};
pub use placement::PackingData;
pub use result::PackSummary;
pub use solver::{Config, ProgressCallback, ProgressInfo, Solver};
