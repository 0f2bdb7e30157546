//! Benchmark result types and recording.

use palletpack_layer::PackedPallet;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Placement info for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementInfo {
    pub box_id: String,
    /// Corner closest to the pallet origin
    pub position: [i64; 3],
    /// Box dimensions as placed
    pub dimensions: [i64; 3],
}

/// Result of a single dataset run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Dataset name
    pub dataset: String,
    /// Pallet dimensions in the orientation used
    pub pallet: [i64; 3],
    /// Number of boxes packed
    pub boxes_packed: usize,
    /// Total boxes in the problem
    pub total_boxes: usize,
    /// Volume of the packed boxes
    pub packed_volume: i64,
    /// Pallet volume
    pub pallet_volume: i64,
    /// Utilization ratio (0.0 - 1.0)
    pub utilization: f64,
    /// Computation time in milliseconds
    pub time_ms: u64,
    /// Number of packing attempts
    pub iterations: u64,
    /// Whether the search stopped early
    pub cancelled: bool,
    /// Ids of the boxes left out
    pub not_packed: Vec<String>,
    /// Placement coordinates (optional, for visualization)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<Vec<PlacementInfo>>,
}

impl RunResult {
    /// Records the outcome of packing `dataset`.
    pub fn from_packed(dataset: impl Into<String>, packed: &PackedPallet) -> Self {
        let summary = packed.summary();
        Self {
            dataset: dataset.into(),
            pallet: packed.pallet_dimensions.to_array(),
            boxes_packed: summary.total_packed,
            total_boxes: summary.total_requested,
            packed_volume: summary.packed_volume,
            pallet_volume: summary.pallet_volume,
            utilization: summary.utilization(),
            time_ms: summary.time_ms,
            iterations: summary.iterations,
            cancelled: summary.cancelled,
            not_packed: packed
                .not_packed_boxes
                .iter()
                .map(|b| b.id().to_string())
                .collect(),
            placements: None,
        }
    }

    /// Attaches the placements of the packed boxes.
    pub fn with_placements(mut self, packed: &PackedPallet) -> Self {
        let placements = packed
            .packed_boxes
            .iter()
            .filter_map(|b| {
                b.packing_data().map(|data| PlacementInfo {
                    box_id: b.id().to_string(),
                    position: data.packed_location.to_array(),
                    dimensions: data.packed_dimensions.to_array(),
                })
            })
            .collect();
        self.placements = Some(placements);
        self
    }
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Individual run results
    pub runs: Vec<RunResult>,
    /// Seconds since the Unix epoch when the benchmark started
    pub timestamp: u64,
    /// Package version
    pub version: String,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Self {
            runs: Vec::new(),
            timestamp,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Adds a run result.
    pub fn add_run(&mut self, result: RunResult) {
        self.runs.push(result);
    }

    /// Average utilization over all runs, or 0 without runs.
    pub fn avg_utilization(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.utilization).sum::<f64>() / self.runs.len() as f64
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves results to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    fn write_csv(&self, mut out: impl Write) -> std::io::Result<()> {
        writeln!(
            out,
            "dataset,pallet,boxes_packed,total_boxes,packed_volume,pallet_volume,utilization,time_ms,iterations,cancelled"
        )?;

        for run in &self.runs {
            writeln!(
                out,
                "{},{}x{}x{},{},{},{},{},{:.4},{},{},{}",
                run.dataset,
                run.pallet[0],
                run.pallet[1],
                run.pallet[2],
                run.boxes_packed,
                run.total_boxes,
                run.packed_volume,
                run.pallet_volume,
                run.utilization,
                run.time_ms,
                run.iterations,
                run.cancelled,
            )?;
        }

        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<90}", "");
        println!("PALLET PACKING RESULTS");
        println!("{:=<90}", "");
        println!(
            "{:<24} {:>16} {:>12} {:>8} {:>10} {:>10}",
            "Dataset", "Pallet", "Packed", "Util%", "Time(ms)", "Attempts"
        );
        println!("{:-<90}", "");

        for run in &self.runs {
            let pallet = format!("{}x{}x{}", run.pallet[0], run.pallet[1], run.pallet[2]);
            let packed = format!("{}/{}", run.boxes_packed, run.total_boxes);
            let marker = if run.cancelled { " *" } else { "" };
            println!(
                "{:<24} {:>16} {:>12} {:>8.1} {:>10} {:>10}{}",
                run.dataset,
                pallet,
                packed,
                run.utilization * 100.0,
                run.time_ms,
                run.iterations,
                marker
            );
        }

        if self.runs.iter().any(|r| r.cancelled) {
            println!("  * stopped early");
        }
        println!("{:=<90}\n", "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletpack_core::Dim3;
    use palletpack_layer::{CargoBox, LayerPacker};

    fn packed() -> PackedPallet {
        let boxes = vec![
            CargoBox::new("a", 10, 10, 10),
            CargoBox::new("b", 10, 10, 10),
            CargoBox::new("huge", 30, 30, 30),
        ];
        LayerPacker::default_config()
            .pack(&boxes, Dim3::new(20, 10, 10))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_run_result() {
        let packed = packed();
        let result = RunResult::from_packed("test", &packed).with_placements(&packed);

        assert_eq!(result.dataset, "test");
        assert_eq!(result.boxes_packed, 2);
        assert_eq!(result.total_boxes, 3);
        assert_eq!(result.not_packed, vec!["huge".to_string()]);
        assert!((result.utilization - 1.0).abs() < 1e-9);
        assert_eq!(result.placements.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_csv_output() {
        let packed = packed();
        let mut results = BenchmarkResult::new();
        results.add_run(RunResult::from_packed("test", &packed));

        let mut out = Vec::new();
        results.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("dataset,pallet,"));
        assert!(lines[1].starts_with("test,"));
        assert!(lines[1].contains(",2,3,2000,2000,1.0000,"));
    }

    #[test]
    fn test_avg_utilization() {
        let mut results = BenchmarkResult::new();
        assert_eq!(results.avg_utilization(), 0.0);
        results.add_run(RunResult::from_packed("test", &packed()));
        assert!((results.avg_utilization() - 1.0).abs() < 1e-9);
    }
}
