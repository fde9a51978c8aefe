use pallet_rs::Dim;
use serde::{Deserialize, Serialize};

/// Constraint that limits the number of cartons on a pallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingConstraint {
    /// The pallet is full: layers are limited by the height, cartons per layer by the footprint
    HeightGeometry,
    /// The maximum payload is reached before the pallet is full
    Weight,
}

/// Height and payload limits of a loaded pallet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalletLimits {
    /// Maximum stacking height of the cartons
    pub max_height: Dim,
    /// Maximum payload in kg
    pub max_payload: f64,
}

/// How many cartons fit on a pallet once height and weight are taken into account.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub boxes_per_layer: usize,
    pub layers_by_height: usize,
    pub max_by_weight: usize,
    pub total_boxes: usize,
    /// Payload of the loaded pallet in kg
    pub pallet_weight: f64,
    pub binding: BindingConstraint,
}

/// Combines the number of cartons per layer with the height and payload limits.
///
/// `carton_height` must be strictly positive and `carton_weight` finite and strictly positive.
pub fn compute(
    boxes_per_layer: usize,
    limits: &PalletLimits,
    carton_height: Dim,
    carton_weight: f64,
) -> CapacityReport {
    debug_assert!(carton_height > 0);
    debug_assert!(carton_weight.is_finite() && carton_weight > 0.0);

    let layers_by_height = usize::try_from(limits.max_height / carton_height).unwrap_or(usize::MAX);
    let max_by_weight = (limits.max_payload / carton_weight).floor() as usize;
    let geometric = boxes_per_layer.saturating_mul(layers_by_height);

    let total_boxes = usize::min(geometric, max_by_weight);
    let binding = match max_by_weight < geometric {
        true => BindingConstraint::Weight,
        false => BindingConstraint::HeightGeometry,
    };

    CapacityReport {
        boxes_per_layer,
        layers_by_height,
        max_by_weight,
        total_boxes,
        pallet_weight: total_boxes as f64 * carton_weight,
        binding,
    }
}
