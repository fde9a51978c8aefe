use crate::entities::{LayerInstance, LayerSolution};
use crate::io::ext_repr::{ExtLayerSolution, ExtPlacement};
use itertools::Itertools;

/// Converts a [`LayerSolution`] into its external representation.
pub fn export_solution(instance: &LayerInstance, solution: &LayerSolution) -> ExtLayerSolution {
    let placements = solution
        .placements
        .iter()
        .enumerate()
        .map(|(i, p)| ExtPlacement {
            index: i + 1,
            x: p.rect.x,
            y: p.rect.y,
            width: p.rect.w,
            height: p.rect.h,
            rotated: p.orientation.is_rotated(),
        })
        .collect_vec();

    ExtLayerSolution {
        n_placed: solution.n_placed(),
        density: solution.density(instance),
        truncated: solution.truncated,
        placements,
    }
}
