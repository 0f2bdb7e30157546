//! Benchmark runner for pallet datasets.

use crate::dataset::Dataset;
use crate::result::{BenchmarkResult, RunResult};
use palletpack_core::{Config, Result};
use palletpack_layer::{LayerPacker, PackedPallet};

/// Configuration for benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Time limit per dataset in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
    /// Run the attempts of each pallet orientation in parallel.
    pub parallel: bool,
    /// Keep box placements in the results.
    pub keep_placements: bool,
    /// Whether to show progress.
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            parallel: false,
            keep_placements: false,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit per dataset.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Enables parallel attempts.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Keeps placements in the results.
    pub fn with_placements(mut self, keep: bool) -> Self {
        self.keep_placements = keep;
        self
    }

    /// Enables or disables progress output.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn solver_config(&self) -> Config {
        Config::new()
            .with_time_limit(self.time_limit_ms)
            .with_parallel(self.parallel)
    }
}

/// Runs the layer packer over datasets and records the outcomes.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a new benchmark runner.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Packs a single dataset.
    pub fn run_dataset(&self, dataset: &Dataset) -> Result<RunResult> {
        if self.config.show_progress {
            let info = dataset.info();
            println!("\nPacking dataset: {}", info.name);
            println!("  Item types: {}", info.item_types);
            println!("  Boxes: {}", info.total_boxes);
            println!("  Pallet: {:?}", info.pallet);
            println!("  Total box volume: {}", info.total_volume);
        }

        let boxes = dataset.expand_items();
        let packer = LayerPacker::new(self.config.solver_config());
        let packed = packer
            .pack(&boxes, dataset.pallet_dimensions())?
            .unwrap_or_else(|| empty_pallet(dataset));

        let mut result = RunResult::from_packed(dataset.name.clone(), &packed);
        if self.config.keep_placements {
            result = result.with_placements(&packed);
        }

        if self.config.show_progress {
            println!(
                "  Packed {}/{} boxes, utilization={:.2}%, attempts={}, time={}ms",
                result.boxes_packed,
                result.total_boxes,
                result.utilization * 100.0,
                result.iterations,
                result.time_ms
            );
        }
        Ok(result)
    }

    /// Packs several datasets. Datasets that fail are logged and skipped.
    pub fn run_datasets(&self, datasets: &[Dataset]) -> BenchmarkResult {
        let mut combined = BenchmarkResult::new();
        for dataset in datasets {
            match self.run_dataset(dataset) {
                Ok(run) => combined.add_run(run),
                Err(e) => log::warn!("Dataset {} failed: {}", dataset.name, e),
            }
        }
        combined
    }
}

fn empty_pallet(dataset: &Dataset) -> PackedPallet {
    PackedPallet {
        pallet_dimensions: dataset.pallet_dimensions(),
        packed_boxes: Vec::new(),
        not_packed_boxes: Vec::new(),
        packed_volume: 0,
        iterations: 0,
        computation_time_ms: 0,
        cancelled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Item;

    fn runner() -> BenchmarkRunner {
        BenchmarkRunner::new(
            BenchmarkConfig::new()
                .with_time_limit(0)
                .with_progress(false)
                .with_placements(true),
        )
    }

    #[test]
    fn test_run_dataset() {
        let dataset = Dataset {
            name: "cubes".to_string(),
            pallet: [20, 20, 20],
            items: vec![Item {
                id: "cube".to_string(),
                dimensions: [10, 10, 10],
                quantity: 8,
            }],
        };

        let result = runner().run_dataset(&dataset).unwrap();
        assert_eq!(result.boxes_packed, 8);
        assert!(result.not_packed.is_empty());
        assert_eq!(result.packed_volume, 8000);

        let placements = result.placements.unwrap();
        assert_eq!(placements.len(), 8);
        assert!(placements.iter().all(|p| p.box_id.starts_with("cube#")));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset {
            name: "empty".to_string(),
            pallet: [10, 10, 10],
            items: Vec::new(),
        };
        let result = runner().run_dataset(&dataset).unwrap();
        assert_eq!(result.total_boxes, 0);
        assert_eq!(result.utilization, 0.0);
    }

    #[test]
    fn test_failed_dataset_is_skipped() {
        let good = Dataset {
            name: "good".to_string(),
            pallet: [10, 10, 10],
            items: vec![Item {
                id: "a".to_string(),
                dimensions: [5, 5, 5],
                quantity: 2,
            }],
        };
        let bad = Dataset {
            name: "bad".to_string(),
            pallet: [10, 0, 10],
            items: good.items.clone(),
        };

        let results = runner().run_datasets(&[good, bad]);
        assert_eq!(results.runs.len(), 1);
        assert_eq!(results.runs[0].dataset, "good");
    }
}
