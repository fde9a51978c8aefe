use crate::entities::{LayerInstance, Pallet, Placement};
use crate::Area;
use crate::geometry::primitives::Rect;
use itertools::Itertools;

/// Result of packing a single layer, placements are stored in the order they were made.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSolution {
    pub pallet: Pallet,
    pub placements: Vec<Placement>,
    /// Set when the search was stopped by the iteration cap instead of running out of candidates
    pub truncated: bool,
}

impl LayerSolution {
    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    /// The placed footprints, in placement order.
    pub fn rects(&self) -> Vec<Rect> {
        self.placements.iter().map(|p| p.rect).collect_vec()
    }

    /// Fraction of the pallet area covered by cartons (spacing excluded).
    pub fn density(&self, instance: &LayerInstance) -> f64 {
        let carton_area = instance.carton.area() * self.n_placed() as Area;
        carton_area as f64 / self.pallet.area() as f64
    }
}
