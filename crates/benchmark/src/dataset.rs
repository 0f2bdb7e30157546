//! Dataset types for pallet packing instances.

use palletpack_core::Dim3;
use palletpack_layer::CargoBox;
use serde::{Deserialize, Serialize};

/// Information about a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name
    pub name: String,
    /// Number of item types
    pub item_types: usize,
    /// Total boxes when quantities are expanded
    pub total_boxes: usize,
    /// Pallet dimensions
    pub pallet: [i64; 3],
    /// Sum of all box volumes
    pub total_volume: i64,
}

/// A pallet packing instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name
    pub name: String,
    /// Pallet dimensions `[x, y, z]`
    pub pallet: [i64; 3],
    /// Box types to pack
    pub items: Vec<Item>,
}

impl Dataset {
    /// Returns dataset information.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: self.name.clone(),
            item_types: self.items.len(),
            total_boxes: self.items.iter().map(|i| i.quantity).sum(),
            pallet: self.pallet,
            total_volume: self.total_volume(),
        }
    }

    /// Pallet dimensions.
    pub fn pallet_dimensions(&self) -> Dim3 {
        Dim3::from(self.pallet)
    }

    /// Sum of the volumes of all boxes, quantities included. Saturates at
    /// `i64::MAX`.
    pub fn total_volume(&self) -> i64 {
        self.items.iter().fold(0i64, |total, i| {
            let volume = Dim3::from(i.dimensions)
                .checked_volume()
                .unwrap_or(i64::MAX)
                .saturating_mul(i64::try_from(i.quantity).unwrap_or(i64::MAX));
            total.saturating_add(volume)
        })
    }

    /// Expands items by quantity into individual boxes.
    ///
    /// Each box is labelled `<item id>#<n>` with `n` counting from 1.
    pub fn expand_items(&self) -> Vec<CargoBox> {
        let mut boxes = Vec::new();
        for item in &self.items {
            for n in 1..=item.quantity {
                boxes.push(CargoBox::with_dimensions(
                    format!("{}#{}", item.id, n),
                    Dim3::from(item.dimensions),
                ));
            }
        }
        boxes
    }
}

/// A box type in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item type ID
    pub id: String,
    /// Box dimensions `[x, y, z]`
    pub dimensions: [i64; 3],
    /// Number of copies
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            name: "test".to_string(),
            pallet: [20, 10, 20],
            items: vec![
                Item {
                    id: "small".to_string(),
                    dimensions: [5, 5, 5],
                    quantity: 3,
                },
                Item {
                    id: "flat".to_string(),
                    dimensions: [10, 2, 10],
                    quantity: 1,
                },
            ],
        }
    }

    #[test]
    fn test_expand_items() {
        let boxes = dataset().expand_items();

        let ids: Vec<&str> = boxes.iter().map(CargoBox::id).collect();
        assert_eq!(ids, vec!["small#1", "small#2", "small#3", "flat#1"]);
        assert_eq!(boxes[3].dimensions(), Dim3::new(10, 2, 10));
        assert!(boxes.iter().all(|b| !b.is_packed()));
    }

    #[test]
    fn test_info() {
        let info = dataset().info();
        assert_eq!(info.item_types, 2);
        assert_eq!(info.total_boxes, 4);
        assert_eq!(info.total_volume, 3 * 125 + 200);
        assert_eq!(info.pallet, [20, 10, 20]);
    }

    #[test]
    fn test_total_volume_saturates() {
        let mut dataset = dataset();
        dataset.items[0].dimensions = [3_000_000; 3];
        assert_eq!(dataset.total_volume(), i64::MAX);
    }
}
