use std::path::Path;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{info, warn};
use pallet_rs::Dim;
use pallet_rs::entities::{LayerInstance, LayerSolution};
use pallet_rs::io::export::export_solution;
use pallet_rs::io::ext_repr::{ExtCarton, ExtLayerInstance, ExtPallet};
use pallet_rs::io::import::{import_instance, import_length};
use pallet_rs::io::svg::layer_to_svg;
use pallet_rs::packing::MaxRectsPacker;
use rayon::prelude::*;
use thousands::Separable;

use crate::capacity;
use crate::capacity::{CapacityReport, PalletLimits};
use crate::config::PlannerConfig;
use crate::io;
use crate::io::ext_repr::{ExtCartonResult, ExtPlan, ExtPlanCarton};
use crate::io::output::PlanOutput;

/// A carton type of the plan, ready to be packed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartonType {
    pub id: u64,
    pub height: Dim,
    /// Weight of a single carton in kg
    pub weight: f64,
    pub layer: LayerInstance,
}

/// Validated internal representation of an [`ExtPlan`].
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub limits: PalletLimits,
    pub cartons: Vec<CartonType>,
}

/// Outcome of packing one carton type.
#[derive(Clone, Debug, PartialEq)]
pub struct CartonPlan {
    pub carton: CartonType,
    pub solution: LayerSolution,
    pub capacity: CapacityReport,
}

pub fn import_plan(ext_plan: &ExtPlan) -> Result<Plan> {
    ensure!(!ext_plan.cartons.is_empty(), "plan does not contain any cartons");
    ensure!(
        ext_plan.cartons.iter().map(|c| c.id).all_unique(),
        "carton ids must be unique"
    );

    let limits = PalletLimits {
        max_height: import_length("pallet max height", ext_plan.pallet.max_height)?,
        max_payload: import_weight("pallet max payload", ext_plan.pallet.max_payload)?,
    };

    let cartons = ext_plan
        .cartons
        .iter()
        .map(|c| import_carton(ext_plan, c).with_context(|| format!("invalid carton {}", c.id)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Plan { limits, cartons })
}

fn import_carton(ext_plan: &ExtPlan, ext_carton: &ExtPlanCarton) -> Result<CartonType> {
    let ext_layer = ExtLayerInstance {
        pallet: ExtPallet {
            length: ext_plan.pallet.length,
            width: ext_plan.pallet.width,
        },
        carton: ExtCarton {
            length: ext_carton.length,
            width: ext_carton.width,
        },
        allow_rotation: ext_plan.allow_rotation,
        spacing: ext_plan.spacing,
    };

    Ok(CartonType {
        id: ext_carton.id,
        height: import_length("carton height", ext_carton.height)?,
        weight: import_weight("carton weight", ext_carton.weight)?,
        layer: import_instance(&ext_layer)?,
    })
}

fn import_weight(name: &str, value: f64) -> Result<f64> {
    ensure!(
        value.is_finite() && value > 0.0,
        "{name} must be finite and strictly positive, got {value}"
    );
    Ok(value)
}

/// Packs a layer for every carton type of the plan and derives the pallet capacity.
///
/// Carton types are independent of each other and are packed in parallel.
/// Results are returned in the order of the plan.
pub fn solve(plan: &Plan, config: &PlannerConfig) -> Vec<CartonPlan> {
    let results = plan
        .cartons
        .par_iter()
        .map(|carton| {
            let solution = MaxRectsPacker::new(carton.layer, config.pack_config).solve();
            let capacity =
                capacity::compute(solution.n_placed(), &plan.limits, carton.height, carton.weight);
            CartonPlan {
                carton: *carton,
                solution,
                capacity,
            }
        })
        .collect::<Vec<_>>();

    for r in &results {
        log_result(r);
    }

    info!(
        "[PLAN] evaluated {} carton types, {} cartons in total",
        results.len(),
        results
            .iter()
            .map(|r| r.capacity.total_boxes)
            .sum::<usize>()
            .separate_with_commas()
    );

    results
}

fn log_result(result: &CartonPlan) {
    let CartonPlan {
        carton, capacity, ..
    } = result;
    if capacity.boxes_per_layer == 0 {
        warn!(
            "[PLAN] carton {} ({} x {}) does not fit on the pallet",
            carton.id, carton.layer.carton.length, carton.layer.carton.width
        );
        return;
    }
    info!(
        "[PLAN] carton {}: {} per layer, {} layers by height, {} max by weight, {} in total ({:.2} kg), binding: {:?}",
        carton.id,
        capacity.boxes_per_layer,
        capacity.layers_by_height,
        capacity.max_by_weight,
        capacity.total_boxes,
        capacity.pallet_weight,
        capacity.binding
    );
}

/// Writes `sol_<stem>.json` and one `sol_<stem>_<carton id>.svg` per carton type to `output_folder`.
pub fn write_solution(
    ext_plan: &ExtPlan,
    results: &[CartonPlan],
    config: &PlannerConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let output = PlanOutput {
        plan: ext_plan.clone(),
        results: results
            .iter()
            .map(|r| ExtCartonResult {
                id: r.carton.id,
                layer: export_solution(&r.carton.layer, &r.solution),
                capacity: r.capacity,
            })
            .collect_vec(),
        config: *config,
    };

    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    for r in results {
        let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", r.carton.id));
        let title = format!("carton {}", r.carton.id);
        let svg = layer_to_svg(&r.carton.layer, &r.solution, config.svg_draw_options, &title);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
