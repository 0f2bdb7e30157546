//! # palletpack Layer
//!
//! Layer-based heuristic packing of boxes onto a pallet.
//!
//! The pallet is filled in horizontal layers stacked along `y`. Within a
//! layer a [`PackLine`] tracks how deep the packed boxes reach, and the
//! lowest segment of that line is filled next with the best fitting box.
//! Layer thicknesses come from the box dimensions themselves, ranked by how
//! well they suit the remaining boxes.
//!
//! ```
//! use palletpack_core::Dim3;
//! use palletpack_layer::{CargoBox, LayerPacker};
//!
//! let boxes: Vec<CargoBox> = (0..8)
//!     .map(|i| CargoBox::new(format!("C{}", i), 10, 10, 10))
//!     .collect();
//! let packer = LayerPacker::default_config();
//! let pallet = packer.pack(&boxes, Dim3::new(20, 20, 20)).unwrap().unwrap();
//! assert!(pallet.all_packed());
//! ```

mod attempt;
pub mod boundary;
pub mod geometry;
pub mod layers;
pub mod pack_line;
pub mod packed;
pub mod packer;
pub mod selector;

// Re-exports
pub use boundary::Pallet;
pub use geometry::CargoBox;
pub use layers::{create_layers, find_layer, Layer};
pub use pack_line::{PackLine, SegmentId};
pub use packed::PackedPallet;
pub use packer::LayerPacker;
pub use selector::{find_box, SelectedBox};
pub use palletpack_core::{Config, Dim3, Error, PackingData, Result, Solver};
