//! Layer packing solver.
//!
//! Searches over the six orientations of the pallet and, for each, over the
//! ranked starting layers. Every combination is one attempt packing a fresh
//! copy of the boxes; the attempt with the greatest packed volume wins.

use crate::attempt::{Attempt, StopSignal};
use crate::boundary::Pallet;
use crate::geometry::CargoBox;
use crate::layers::create_layers;
use crate::packed::PackedPallet;
use palletpack_core::solver::{Config, ProgressCallback, ProgressInfo, Solver};
use palletpack_core::{Dim3, Error, Result};
use rayon::prelude::*;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Layer-based pallet packer.
pub struct LayerPacker {
    config: Config,
    cancelled: Arc<AtomicBool>,
    iterations: AtomicU64,
}

/// Running best of one search.
struct Search<'a> {
    best: Option<PackedPallet>,
    pallet_volume: i64,
    start: Instant,
    callback: Option<&'a ProgressCallback>,
}

impl Search<'_> {
    /// Keeps `candidate` if it beats the best so far. Returns true if the
    /// candidate packed everything.
    fn consider(&mut self, candidate: PackedPallet, iterations: u64) -> bool {
        let all_packed = candidate.all_packed();
        let better = self
            .best
            .as_ref()
            .map_or(true, |best| candidate.packed_volume > best.packed_volume);
        if better {
            self.best = Some(candidate);
        }
        self.report(iterations, true);
        all_packed
    }

    fn best_volume(&self) -> i64 {
        self.best.as_ref().map_or(0, |b| b.packed_volume)
    }

    fn report(&self, iterations: u64, running: bool) {
        if let Some(callback) = self.callback {
            callback(ProgressInfo {
                iterations,
                best_volume: self.best_volume(),
                pallet_volume: self.pallet_volume,
                elapsed_ms: self.start.elapsed().as_millis() as u64,
                running,
            });
        }
    }
}

impl LayerPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
            iterations: AtomicU64::new(0),
        }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of attempts performed by the current or last search.
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Returns a handle that cancels the search when set, usable from
    /// another thread.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Packs `boxes` onto a pallet of the given size.
    ///
    /// Returns `Ok(None)` if `boxes` is empty, without validating the pallet.
    pub fn pack(&self, boxes: &[CargoBox], pallet_size: Dim3) -> Result<Option<PackedPallet>> {
        self.solve(boxes, &Pallet::from(pallet_size))
    }

    fn run(
        &self,
        boxes: &[CargoBox],
        pallet: &Pallet,
        callback: Option<&ProgressCallback>,
    ) -> Result<Option<PackedPallet>> {
        // Reset state from a previous search
        self.cancelled.store(false, Ordering::Relaxed);
        self.iterations.store(0, Ordering::Relaxed);

        if boxes.is_empty() {
            return Ok(None);
        }

        pallet.validate()?;
        for cargo in boxes {
            cargo.validate()?;
        }

        let start = Instant::now();
        let stop = StopSignal::new(&self.cancelled, start, self.config.time_limit_ms);
        let original = pallet.dimensions();
        let mut search = Search {
            best: None,
            pallet_volume: pallet.volume(),
            start,
            callback,
        };

        'rotations: for rotated in original.rotations() {
            let layers = create_layers(boxes, rotated);
            log::debug!(
                "Pallet {} has {} candidate starting layers",
                rotated,
                layers.len()
            );

            if self.config.parallel {
                let outcomes: Vec<Option<PackedPallet>> = layers
                    .par_iter()
                    .map(|layer| {
                        if stop.should_stop() {
                            return None;
                        }
                        self.iterations.fetch_add(1, Ordering::Relaxed);
                        Attempt::new(boxes, rotated, &stop).run(layer)
                    })
                    .collect();

                for (layer, outcome) in layers.iter().zip(outcomes) {
                    let Some(packed) = outcome else {
                        break 'rotations;
                    };
                    self.log_attempt(rotated, layer.thickness, &packed);
                    if search.consider(packed, self.iterations()) {
                        break 'rotations;
                    }
                }
            } else {
                for layer in &layers {
                    if stop.should_stop() {
                        break 'rotations;
                    }
                    self.iterations.fetch_add(1, Ordering::Relaxed);
                    let Some(packed) = Attempt::new(boxes, rotated, &stop).run(layer) else {
                        break 'rotations;
                    };
                    self.log_attempt(rotated, layer.thickness, &packed);
                    if search.consider(packed, self.iterations()) {
                        break 'rotations;
                    }
                }
            }

            // Every orientation of a cube pallet is the same
            if original.is_cube() && !self.config.try_all_rotations {
                break;
            }
        }

        let cancelled = self.cancelled.load(Ordering::Relaxed);
        let iterations = self.iterations();
        let elapsed_ms = search.start.elapsed().as_millis() as u64;
        search.report(iterations, false);

        let mut best = match search.best {
            Some(best) => best,
            None if cancelled => return Err(Error::Cancelled),
            // No box fits the pallet in any orientation
            None => nothing_packed(boxes, original),
        };
        best.iterations = iterations;
        best.computation_time_ms = elapsed_ms;
        best.cancelled = cancelled;

        log::info!(
            "Packed {}/{} boxes ({:.1}% of pallet) in {} attempts, {}ms",
            best.packed_boxes.len(),
            boxes.len(),
            best.utilization() * 100.0,
            iterations,
            elapsed_ms
        );
        Ok(Some(best))
    }

    fn log_attempt(&self, pallet: Dim3, thickness: i64, packed: &PackedPallet) {
        log::debug!(
            "Attempt {}: pallet {} starting layer {} packed volume {} ({} boxes left)",
            self.iterations(),
            pallet,
            thickness,
            packed.packed_volume,
            packed.not_packed_boxes.len()
        );
    }
}

fn nothing_packed(boxes: &[CargoBox], pallet: Dim3) -> PackedPallet {
    PackedPallet {
        pallet_dimensions: pallet,
        packed_boxes: Vec::new(),
        not_packed_boxes: boxes
            .iter()
            .map(|b| CargoBox::with_dimensions(b.id(), b.dimensions()))
            .collect(),
        packed_volume: 0,
        iterations: 0,
        computation_time_ms: 0,
        cancelled: false,
    }
}

impl Solver for LayerPacker {
    type Item = CargoBox;
    type Container = Pallet;
    type Output = PackedPallet;

    fn solve(&self, boxes: &[CargoBox], pallet: &Pallet) -> Result<Option<PackedPallet>> {
        self.run(boxes, pallet, None)
    }

    fn solve_with_progress(
        &self,
        boxes: &[CargoBox],
        pallet: &Pallet,
        callback: ProgressCallback,
    ) -> Result<Option<PackedPallet>> {
        self.run(boxes, pallet, Some(&callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
