//! Benchmark suite for palletpack
//!
//! This crate provides:
//! - JSON dataset parser for pallet packing instances
//! - Synthetic dataset generators with known perfect packings
//! - Benchmark runner and result recording

mod dataset;
mod parser;
mod result;
mod runner;
mod synthetic;

pub use dataset::{Dataset, DatasetInfo, Item};
pub use parser::{DatasetParser, ParseError};
pub use result::{BenchmarkResult, PlacementInfo, RunResult};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
pub use synthetic::SyntheticGenerator;
