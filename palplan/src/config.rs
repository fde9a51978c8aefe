use pallet_rs::io::svg::svg_util::SvgDrawOptions;
use pallet_rs::util::PackConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the pallet planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PlannerConfig {
    /// Configuration of the packing engine
    #[serde(default)]
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
