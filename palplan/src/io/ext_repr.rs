use pallet_rs::io::ext_repr::ExtLayerSolution;
use serde::{Deserialize, Serialize};

use crate::capacity::CapacityReport;

/// External representation of a pallet plan: one pallet and the carton types to evaluate on it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlan {
    pub pallet: ExtPlanPallet,
    /// Every carton type is packed independently
    pub cartons: Vec<ExtPlanCarton>,
    /// Whether cartons may be turned by 90°, allowed if not specified
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// Margin added to the carton's length and width, none if not specified
    #[serde(default)]
    pub spacing: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlanPallet {
    pub length: f64,
    pub width: f64,
    /// Maximum stacking height of the cartons
    pub max_height: f64,
    /// Maximum payload in kg
    #[serde(default = "default_max_payload")]
    pub max_payload: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlanCarton {
    /// Unique identifier of the carton type
    pub id: u64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Weight of a single carton in kg
    pub weight: f64,
}

/// Packed layer and capacity of a single carton type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCartonResult {
    pub id: u64,
    pub layer: ExtLayerSolution,
    pub capacity: CapacityReport,
}

fn default_allow_rotation() -> bool {
    true
}

fn default_max_payload() -> f64 {
    1000.0
}
