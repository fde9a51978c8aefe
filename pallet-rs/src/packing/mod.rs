mod free_space;
mod maxrects;
pub mod score;

#[doc(inline)]
pub use free_space::FreeSpace;
#[doc(inline)]
pub use maxrects::{Candidate, MaxRectsPacker, PackState};

use crate::Dim;
use crate::entities::{Carton, LayerInstance, Pallet};
use crate::geometry::primitives::Rect;
use crate::util::PackConfig;
use anyhow::Result;

/// Packs a single layer of identical `box_length` x `box_width` cartons on a `pallet_length` x `pallet_width` pallet.
///
/// Returns the placed footprints (spacing included) in placement order.
/// Zero-sized dimensions are rejected before any packing is attempted.
/// A carton that does not fit in any allowed orientation yields an empty layer, not an error.
pub fn pack_layer(
    pallet_length: Dim,
    pallet_width: Dim,
    box_length: Dim,
    box_width: Dim,
    allow_rotation: bool,
    spacing: Dim,
) -> Result<Vec<Rect>> {
    let pallet = Pallet::try_new(pallet_length, pallet_width)?;
    let carton = Carton::try_new(box_length, box_width)?;
    let instance = LayerInstance::try_new(pallet, carton, allow_rotation, spacing)?;

    let solution = MaxRectsPacker::new(instance, PackConfig::default()).solve();
    Ok(solution.rects())
}
