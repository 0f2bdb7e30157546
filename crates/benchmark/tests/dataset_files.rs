//! File round trips through the parser and result writers.

use palletpack_benchmark::{
    BenchmarkConfig, BenchmarkResult, BenchmarkRunner, DatasetParser, SyntheticGenerator,
};
use std::fs;

fn runner() -> BenchmarkRunner {
    BenchmarkRunner::new(
        BenchmarkConfig::new()
            .with_time_limit(0)
            .with_progress(false),
    )
}

#[test]
fn test_generated_dataset_is_packed_completely() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cubes.json");

    let dataset = SyntheticGenerator::cube_tiling([40, 20, 30], 10);
    fs::write(&path, serde_json::to_string_pretty(&dataset).unwrap()).unwrap();

    let parsed = DatasetParser::new().parse_file(&path).unwrap();
    assert_eq!(parsed.expand_items().len(), 24);

    let run = runner().run_dataset(&parsed).unwrap();
    assert_eq!(run.boxes_packed, 24);
    assert!((run.utilization - 1.0).abs() < 1e-9);
}

#[test]
fn test_run_all_over_directory() {
    let dir = tempfile::tempdir().unwrap();
    for side in [5, 10] {
        let dataset = SyntheticGenerator::cube_tiling([20, 20, 20], side);
        let path = dir.path().join(format!("{}.json", dataset.name));
        fs::write(path, serde_json::to_string(&dataset).unwrap()).unwrap();
    }
    fs::write(dir.path().join("notes.txt"), "not a dataset").unwrap();

    let parser = DatasetParser::new();
    let files = parser.list_dir(dir.path()).unwrap();
    assert_eq!(files.len(), 2);

    let datasets: Vec<_> = files
        .iter()
        .map(|f| parser.parse_file(f).unwrap())
        .collect();
    let results = runner().run_datasets(&datasets);
    assert_eq!(results.runs.len(), 2);
    assert!((results.avg_utilization() - 1.0).abs() < 1e-9);

    let json_path = dir.path().join("out.json");
    let csv_path = dir.path().join("out.csv");
    results.save_json(&json_path).unwrap();
    results.save_csv(&csv_path).unwrap();

    let saved: BenchmarkResult =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(saved.runs.len(), 2);
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 3);
}

#[test]
fn test_guillotine_dataset_packs_within_pallet() {
    let dataset = SyntheticGenerator::with_seed(3).guillotine([60, 40, 50], 15);
    let run = runner().run_dataset(&dataset).unwrap();

    assert_eq!(run.total_boxes, 15);
    assert!(run.packed_volume <= 60 * 40 * 50);
    assert_eq!(run.boxes_packed + run.not_packed.len(), 15);
}
