//! A single packing attempt: one pallet orientation, one starting layer.
//!
//! All state an attempt touches lives in [`Attempt`], so attempts can run
//! side by side without sharing anything but the stop signal.

use crate::geometry::CargoBox;
use crate::layers::{self, Layer};
use crate::pack_line::PackLine;
use crate::packed::PackedPallet;
use crate::selector::{self, SelectedBox};
use palletpack_core::{Dim3, PackingData};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cooperative stop check shared by the attempts of one search.
pub(crate) struct StopSignal<'a> {
    cancelled: &'a AtomicBool,
    deadline: Option<Instant>,
}

impl<'a> StopSignal<'a> {
    pub(crate) fn new(cancelled: &'a AtomicBool, start: Instant, time_limit_ms: u64) -> Self {
        let deadline = (time_limit_ms > 0).then(|| start + Duration::from_millis(time_limit_ms));
        Self {
            cancelled,
            deadline,
        }
    }

    /// Returns true once cancellation was requested or the time limit passed.
    pub(crate) fn should_stop(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                if !self.cancelled.swap(true, Ordering::Relaxed) {
                    log::warn!("Time limit reached, stopping the search");
                }
                return true;
            }
        }
        false
    }
}

/// Working state of one attempt.
pub(crate) struct Attempt<'a> {
    pallet: Dim3,
    boxes: Vec<CargoBox>,
    /// Indices into `boxes`, in input order.
    not_packed: Vec<usize>,
    /// Indices into `boxes`, in placement order.
    packed: Vec<usize>,
    packed_volume: i64,
    all_packed: bool,
    stopped: bool,
    /// Extra thickness the current layer grew by to take taller boxes.
    sublayer_thickness: i64,
    /// Depth limit of the sub-layer filling the space above the nominal layer.
    sublayer_z_limit: i64,
    stop: &'a StopSignal<'a>,
}

impl<'a> Attempt<'a> {
    pub(crate) fn new(boxes: &[CargoBox], pallet: Dim3, stop: &'a StopSignal<'a>) -> Self {
        let boxes: Vec<CargoBox> = boxes
            .iter()
            .map(|b| {
                let mut b = b.clone();
                b.clear_packing_data();
                b
            })
            .collect();
        Self {
            pallet,
            not_packed: (0..boxes.len()).collect(),
            packed: Vec::new(),
            boxes,
            packed_volume: 0,
            all_packed: false,
            stopped: false,
            sublayer_thickness: 0,
            sublayer_z_limit: 0,
            stop,
        }
    }

    /// Packs the pallet starting with `start`. Returns `None` if the attempt
    /// was interrupted by the stop signal.
    pub(crate) fn run(mut self, start: &Layer) -> Option<PackedPallet> {
        self.pack_pallet(start.thickness);
        if self.stopped {
            return None;
        }
        Some(self.into_packed_pallet())
    }

    fn check_stop(&mut self) -> bool {
        if !self.stopped && self.stop.should_stop() {
            self.stopped = true;
        }
        self.stopped
    }

    /// Builds layers bottom-up until nothing else fits.
    fn pack_pallet(&mut self, start_thickness: i64) {
        let mut layer_y = 0;
        let mut thickness = start_thickness;
        loop {
            self.sublayer_thickness = 0;
            let nominal = thickness;
            thickness = self.pack_layer(layer_y, thickness, self.pallet.y - layer_y, self.pallet.z);
            if self.all_packed {
                break;
            }
            if self.sublayer_thickness != 0 && !self.check_stop() {
                let sublayer = self.sublayer_thickness;
                self.pack_layer(
                    layer_y + nominal,
                    sublayer,
                    thickness - nominal,
                    self.sublayer_z_limit,
                );
                if self.all_packed {
                    break;
                }
            }
            layer_y += thickness;
            thickness = layers::find_layer(
                &self.boxes,
                &self.not_packed,
                self.pallet.with_y(self.pallet.y - layer_y),
            );
            if thickness == 0 || self.check_stop() {
                break;
            }
        }
    }

    /// Packs one layer starting at `layer_y`. Returns the thickness actually
    /// used, which grows beyond `thickness` when taller boxes were taken.
    fn pack_layer(&mut self, layer_y: i64, thickness: i64, max_thickness: i64, z_limit: i64) -> i64 {
        if thickness == 0 {
            return thickness;
        }
        let mut thickness = thickness;
        let mut line = PackLine::new(self.pallet.x);
        while !self.check_stop() {
            let valley = line.find_valley();
            let valley_z = line.z(valley);
            let alone = line.is_alone(valley);

            let top_z = match (line.left_of(valley), line.right_of(valley)) {
                (None, None) => z_limit,
                (Some(left), _) => line.z(left),
                (None, Some(right)) => line.z(right),
            };
            let ideal = Dim3::new(line.width(valley), thickness, top_z - valley_z);
            let maximum = ideal.with_yz(max_thickness, z_limit - valley_z);

            let selected =
                match selector::find_box(&self.boxes, &self.not_packed, ideal, maximum) {
                    Some(s) if s.fits_in_layer => s,
                    Some(s) if self.sublayer_thickness != 0 || alone => {
                        if self.sublayer_thickness == 0 {
                            self.sublayer_z_limit = valley_z;
                        }
                        self.sublayer_thickness += s.packed_dimensions.y - thickness;
                        log::trace!(
                            "Layer at y={} grows from {} to {} for box {}",
                            layer_y,
                            thickness,
                            s.packed_dimensions.y,
                            self.boxes[s.index].id()
                        );
                        thickness = s.packed_dimensions.y;
                        s
                    }
                    _ if alone => break,
                    _ => {
                        line.fill_valley(valley);
                        continue;
                    }
                };

            let location = Dim3::new(line.left_x(valley), layer_y, valley_z);
            self.pack_box(&selected, location);
            line.apply_box(valley, selected.packed_dimensions);

            if self.all_packed {
                break;
            }
        }
        thickness
    }

    fn pack_box(&mut self, selected: &SelectedBox, location: Dim3) {
        let index = selected.index;
        if let Some(pos) = self.not_packed.iter().position(|&i| i == index) {
            self.not_packed.remove(pos);
        }
        self.packed.push(index);

        let cargo = &mut self.boxes[index];
        self.packed_volume += cargo.volume();
        cargo.set_packing_data(PackingData::new(selected.packed_dimensions, location));

        if self.not_packed.is_empty() || self.packed_volume == self.pallet.volume() {
            self.all_packed = true;
        }
    }

    fn into_packed_pallet(self) -> PackedPallet {
        let Attempt {
            pallet,
            boxes,
            not_packed,
            packed,
            packed_volume,
            ..
        } = self;
        let mut slots: Vec<Option<CargoBox>> = boxes.into_iter().map(Some).collect();
        let mut take = |indices: Vec<usize>| -> Vec<CargoBox> {
            indices.into_iter().filter_map(|i| slots[i].take()).collect()
        };
        let packed_boxes = take(packed);
        let not_packed_boxes = take(not_packed);
        PackedPallet {
            pallet_dimensions: pallet,
            packed_boxes,
            not_packed_boxes,
            packed_volume,
            iterations: 0,
            computation_time_ms: 0,
            cancelled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(boxes: &[CargoBox], pallet: Dim3, thickness: i64) -> PackedPallet {
        let flag = AtomicBool::new(false);
        let stop = StopSignal::new(&flag, Instant::now(), 0);
        Attempt::new(boxes, pallet, &stop)
            .run(&Layer {
                thickness,
                score: 0,
            })
            .unwrap()
    }

    #[test]
    fn test_single_layer_of_cubes() {
        let boxes: Vec<CargoBox> = (0..4)
            .map(|i| CargoBox::new(format!("C{}", i), 10, 10, 10))
            .collect();
        let packed = run(&boxes, Dim3::new(20, 10, 20), 10);

        assert!(packed.all_packed());
        assert_eq!(packed.packed_volume, 4000);
        let locations: Vec<Dim3> = packed
            .packed_boxes
            .iter()
            .map(|b| b.packing_data().unwrap().packed_location)
            .collect();
        assert_eq!(
            locations,
            vec![
                Dim3::new(0, 0, 0),
                Dim3::new(10, 0, 0),
                Dim3::new(0, 0, 10),
                Dim3::new(10, 0, 10),
            ]
        );
    }

    #[test]
    fn test_boxes_stack_into_second_layer() {
        let boxes: Vec<CargoBox> = (0..2)
            .map(|i| CargoBox::new(format!("C{}", i), 10, 10, 10))
            .collect();
        let packed = run(&boxes, Dim3::new(10, 20, 10), 10);

        assert!(packed.all_packed());
        let ys: Vec<i64> = packed
            .packed_boxes
            .iter()
            .map(|b| b.packing_data().unwrap().packed_location.y)
            .collect();
        assert_eq!(ys, vec![0, 10]);
    }

    #[test]
    fn test_taller_box_thickens_layer_and_fills_sublayer() {
        let boxes = vec![
            CargoBox::new("base", 10, 5, 8),
            CargoBox::new("tall", 10, 6, 2),
            CargoBox::new("thin", 7, 1, 7),
        ];
        let packed = run(&boxes, Dim3::new(10, 12, 10), 5);
        assert!(packed.all_packed());

        let data = |id: &str| {
            *packed
                .packed_boxes
                .iter()
                .find(|b| b.id() == id)
                .unwrap()
                .packing_data()
                .unwrap()
        };
        assert_eq!(data("base").packed_location, Dim3::ZERO);
        // Only the tall box is left for the strip behind the base, so the
        // layer grows from 5 to 6.
        assert_eq!(data("tall").packed_location, Dim3::new(0, 0, 8));
        assert_eq!(data("tall").packed_dimensions, Dim3::new(10, 6, 2));
        // The extra thickness above the base becomes a sub-layer.
        assert_eq!(data("thin").packed_location, Dim3::new(0, 5, 0));
        assert_eq!(data("thin").packed_dimensions, Dim3::new(7, 1, 7));
    }

    #[test]
    fn test_stopped_attempt_returns_none() {
        let flag = AtomicBool::new(true);
        let stop = StopSignal::new(&flag, Instant::now(), 0);
        let boxes = vec![CargoBox::new("A", 1, 1, 1)];
        let result = Attempt::new(&boxes, Dim3::new(5, 5, 5), &stop).run(&Layer {
            thickness: 1,
            score: 0,
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_packed_boxes_do_not_overlap() {
        let mut boxes = Vec::new();
        for i in 0..6 {
            boxes.push(CargoBox::new(format!("A{}", i), 7, 3, 5));
            boxes.push(CargoBox::new(format!("B{}", i), 4, 6, 2));
        }
        let pallet = Dim3::new(20, 15, 12);
        let packed = run(&boxes, pallet, 3);

        let placed: Vec<PackingData> = packed
            .packed_boxes
            .iter()
            .map(|b| *b.packing_data().unwrap())
            .collect();
        for (i, a) in placed.iter().enumerate() {
            assert!(pallet.contains(&a.max_corner()), "{} outside pallet", a);
            for b in placed.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{} overlaps {}", a, b);
            }
        }
        assert_eq!(packed.packed_boxes.len() + packed.not_packed_boxes.len(), 12);
    }
}
