use crate::Dim;
use serde::{Deserialize, Serialize};

/// External representation of a [`Pallet`](crate::entities::Pallet).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPallet {
    /// Extent along the x-axis
    pub length: f64,
    /// Extent along the y-axis
    pub width: f64,
}

/// External representation of a [`Carton`](crate::entities::Carton) footprint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCarton {
    pub length: f64,
    pub width: f64,
}

/// External representation of a [`LayerInstance`](crate::entities::LayerInstance).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtLayerInstance {
    pub pallet: ExtPallet,
    pub carton: ExtCarton,
    /// Whether cartons may be turned by 90°, allowed if not specified
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// Margin added to the carton's length and width, none if not specified
    #[serde(default)]
    pub spacing: f64,
}

fn default_allow_rotation() -> bool {
    true
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    /// 1-based position in the placement order
    pub index: usize,
    /// Lower-left corner of the footprint
    pub x: Dim,
    pub y: Dim,
    pub width: Dim,
    pub height: Dim,
    pub rotated: bool,
}

/// External representation of a [`LayerSolution`](crate::entities::LayerSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayerSolution {
    /// Number of cartons in the layer
    pub n_placed: usize,
    /// Fraction of the pallet area covered by cartons
    pub density: f64,
    /// True if the search was cut short by the iteration cap
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
    pub placements: Vec<ExtPlacement>,
}
