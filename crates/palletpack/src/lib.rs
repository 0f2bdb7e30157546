//! # palletpack
//!
//! Packs rectangular boxes onto a rectangular pallet with a layer-based
//! heuristic. Boxes may be rotated freely by 90 degrees; the result tells
//! where each box goes and which boxes did not fit.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletpack::{CargoBox, Dim3, LayerPacker};
//!
//! let boxes = vec![
//!     CargoBox::new("crate", 40, 30, 20),
//!     CargoBox::new("carton", 20, 30, 20),
//!     CargoBox::new("case", 60, 10, 40),
//! ];
//!
//! let packer = LayerPacker::default_config();
//! let pallet = packer.pack(&boxes, Dim3::new(60, 40, 40))?.expect("boxes given");
//!
//! for cargo in &pallet.packed_boxes {
//!     println!("{} {}", cargo.id(), cargo);
//! }
//! # Ok::<(), palletpack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core value types and traits.
pub use palletpack_core as core;

/// Layer packing engine.
pub use palletpack_layer as layer;

// Re-export commonly used types at root level
pub use palletpack_core::{Config, Dim3, Error, PackSummary, PackingData, Result, Solver};
pub use palletpack_layer::{CargoBox, LayerPacker, PackedPallet, Pallet};
